//! PostgreSQL Repository Implementation

use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::search_query::SearchQuery;
use crate::error::UserResult;

/// PostgreSQL-backed user directory
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                last_name,
                email
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn search(&self, query: &SearchQuery, limit: usize) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                last_name,
                email
            FROM users
            WHERE name ILIKE $1
               OR last_name ILIKE $1
               OR (name || ' ' || last_name) ILIKE $1
            LIMIT $2
            "#,
        )
        .bind(query.like_pattern())
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    last_name: String,
    email: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

//! PostgreSQL Repository Implementation
//!
//! Both user snapshots are flat columns of `interactions`; reading a record
//! never joins `users`.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{InteractionId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Interaction, UserSnapshot};
use crate::domain::repository::InteractionRepository;
use crate::domain::value_objects::{ClientIp, InteractionType, Score};
use crate::error::{InteractionError, InteractionResult};

/// PostgreSQL-backed interaction store
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT
        interaction_id,
        user_id,
        user_name,
        user_last_name,
        user_email,
        interacting_user_id,
        interacting_user_name,
        interacting_user_last_name,
        interacting_user_email,
        interaction_type,
        client_ip,
        interaction_date,
        score,
        created_at
    FROM interactions
"#;

impl InteractionRepository for PgInteractionRepository {
    async fn insert_batch(&self, interactions: &[Interaction]) -> InteractionResult<()> {
        let mut tx = self.pool.begin().await?;

        for interaction in interactions {
            sqlx::query(
                r#"
                INSERT INTO interactions (
                    interaction_id,
                    user_id,
                    user_name,
                    user_last_name,
                    user_email,
                    interacting_user_id,
                    interacting_user_name,
                    interacting_user_last_name,
                    interacting_user_email,
                    interaction_type,
                    client_ip,
                    interaction_date,
                    score,
                    created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                "#,
            )
            .bind(interaction.id.as_uuid())
            .bind(interaction.user.user_id.as_uuid())
            .bind(&interaction.user.name)
            .bind(&interaction.user.last_name)
            .bind(&interaction.user.email)
            .bind(interaction.interacting_user.user_id.as_uuid())
            .bind(&interaction.interacting_user.name)
            .bind(&interaction.interacting_user.last_name)
            .bind(&interaction.interacting_user.email)
            .bind(interaction.interaction_type.as_str())
            .bind(interaction.client_ip.as_str())
            .bind(interaction.date)
            .bind(interaction.score.value())
            .bind(interaction.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> InteractionResult<Vec<Interaction>> {
        let sql = format!(
            "{SELECT_COLUMNS} WHERE user_id = $1 AND interaction_date = $2 ORDER BY created_seq"
        );

        let rows = sqlx::query_as::<_, InteractionRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(date)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(InteractionRow::into_interaction).collect()
    }

    async fn find_by_id(&self, id: &InteractionId) -> InteractionResult<Option<Interaction>> {
        let sql = format!("{SELECT_COLUMNS} WHERE interaction_id = $1");

        let row = sqlx::query_as::<_, InteractionRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(InteractionRow::into_interaction).transpose()
    }

    async fn delete_by_id(&self, id: &InteractionId) -> InteractionResult<bool> {
        let result = sqlx::query("DELETE FROM interactions WHERE interaction_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct InteractionRow {
    interaction_id: Uuid,
    user_id: Uuid,
    user_name: String,
    user_last_name: String,
    user_email: String,
    interacting_user_id: Uuid,
    interacting_user_name: String,
    interacting_user_last_name: String,
    interacting_user_email: String,
    interaction_type: String,
    client_ip: String,
    interaction_date: NaiveDate,
    score: i16,
    created_at: DateTime<Utc>,
}

impl InteractionRow {
    fn into_interaction(self) -> InteractionResult<Interaction> {
        let score = Score::try_from(self.score).map_err(|value| {
            InteractionError::CorruptRecord(format!(
                "interaction {} has score {value}",
                self.interaction_id
            ))
        })?;

        Ok(Interaction {
            id: InteractionId::from_uuid(self.interaction_id),
            user: UserSnapshot {
                user_id: UserId::from_uuid(self.user_id),
                name: self.user_name,
                last_name: self.user_last_name,
                email: self.user_email,
            },
            interacting_user: UserSnapshot {
                user_id: UserId::from_uuid(self.interacting_user_id),
                name: self.interacting_user_name,
                last_name: self.interacting_user_last_name,
                email: self.interacting_user_email,
            },
            interaction_type: InteractionType::from_db(self.interaction_type),
            client_ip: ClientIp::from_db(self.client_ip),
            date: self.interaction_date,
            score,
            created_at: self.created_at,
        })
    }
}

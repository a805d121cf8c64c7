//! Search Users Use Case

use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::search_query::SearchQuery;
use crate::error::UserResult;

/// Search users use case
pub struct SearchUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<UserConfig>,
}

impl<R> SearchUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<UserConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, raw_query: String) -> UserResult<Vec<User>> {
        let query = SearchQuery::new(raw_query)?;

        let users = self
            .user_repo
            .search(&query, self.config.search_limit)
            .await?;

        tracing::debug!(query = %query, matches = users.len(), "User search");

        Ok(users)
    }
}

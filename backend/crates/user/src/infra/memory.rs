//! In-memory Repository Implementation
//!
//! Keeps users in insertion order. Used by tests and local tooling.

use std::sync::{Arc, PoisonError, RwLock};

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::search_query::SearchQuery;
use crate::error::UserResult;

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }

    pub fn insert(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user);
    }
}

impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
    }

    async fn search(&self, query: &SearchQuery, limit: usize) -> UserResult<Vec<User>> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users
            .iter()
            .filter(|u| u.matches(query))
            .take(limit)
            .cloned()
            .collect())
    }
}

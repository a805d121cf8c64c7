//! Repository Traits
//!
//! Interfaces for reading the user directory. Implementation is in the
//! infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::search_query::SearchQuery;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>>;

    /// Case-insensitive substring search, at most `limit` users, store order
    async fn search(&self, query: &SearchQuery, limit: usize) -> UserResult<Vec<User>>;
}

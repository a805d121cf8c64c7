//! User Entity
//!
//! A directory entry as read from the `users` table.

use kernel::id::UserId;

use crate::domain::value_object::search_query::SearchQuery;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// "name last_name", the form people type into the search box
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }

    /// Case-insensitive substring match on name, last name or full name
    pub fn matches(&self, query: &SearchQuery) -> bool {
        let needle = query.folded();
        self.name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.full_name().to_lowercase().contains(needle)
    }
}

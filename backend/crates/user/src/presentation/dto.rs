//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entity::user::User;

/// One entry of the GET /users/{query} response
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserSummaryResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

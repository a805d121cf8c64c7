//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod search_users;

// Re-exports
pub use config::UserConfig;
pub use search_users::SearchUsersUseCase;

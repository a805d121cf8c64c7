//! User Directory Module
//!
//! Users are owned by an external directory; this crate only reads them.
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, search query value object, repository trait
//! - `application/` - Search use case and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Other feature crates resolve users through [`UserRepository`] to take
//! snapshots of them at write time.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UserConfig;
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use error::{UserError, UserResult};
pub use infra::memory::MemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::user_router;

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

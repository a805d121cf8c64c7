//! Interaction Recording & Scoring Engine
//!
//! Clean Architecture structure:
//! - `domain/` - Interaction entity, value objects, scoring rule, batch
//!   validator, repository trait
//! - `application/` - Record, list and delete use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Scores are computed once, at write time, from the declared type and the
//!   caller-asserted client IP; they are never recomputed
//! - The civil date is stamped by the server clock in the business timezone
//! - Both users are stored as snapshots taken at write time
//! - A batch is persisted all-or-nothing, after every user has been resolved
//! - A record can only be deleted on the civil day it was created

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::InteractionConfig;
pub use error::{InteractionError, InteractionResult};
pub use infra::memory::MemoryInteractionRepository;
pub use infra::postgres::PgInteractionRepository;
pub use presentation::router::interaction_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgInteractionRepository as InteractionStore;
}

#[cfg(test)]
mod tests;

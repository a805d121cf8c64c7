//! Domain Layer
//!
//! Contains entities, value objects, the scoring rule, the batch validator
//! and the repository trait.

pub mod entities;
pub mod repository;
pub mod services;
pub mod validation;
pub mod value_objects;

// Re-exports
pub use entities::{Interaction, RecordState, UserSnapshot};
pub use repository::InteractionRepository;
pub use validation::{ValidatedBatch, ValidationError, validate_batch};
pub use value_objects::{ClientIp, InteractionType, Score};

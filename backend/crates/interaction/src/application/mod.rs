//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_interaction;
pub mod list_interactions;
pub mod record_interactions;

// Re-exports
pub use config::InteractionConfig;
pub use delete_interaction::DeleteInteractionUseCase;
pub use list_interactions::{DailyInteractions, ListInteractionsUseCase};
pub use record_interactions::{CreatedRecord, RecordInteractionsUseCase};

//! Infrastructure Layer
//!
//! Database implementations of the interaction store.

pub mod memory;
pub mod postgres;

pub use memory::MemoryInteractionRepository;
pub use postgres::PgInteractionRepository;

//! Infrastructure Layer
//!
//! Database implementations of the user directory.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;

//! Domain Layer
//!
//! Contains the user entity, value objects, and repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use repository::UserRepository;
pub use value_object::search_query::SearchQuery;

//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every feature crate agrees on:
//! - Common error types rendered at the HTTP boundary
//! - Typed identifiers for interactions and users
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

//! Presentation Layer
//!
//! HTTP handlers and DTOs for interactions.

pub mod dto;
pub mod handlers;
pub mod router;

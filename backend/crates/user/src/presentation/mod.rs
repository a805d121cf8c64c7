//! Presentation Layer
//!
//! HTTP handlers and DTOs for the user directory.

pub mod dto;
pub mod handlers;
pub mod router;

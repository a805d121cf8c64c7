//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Clock abstraction (system and manually driven clocks)
//! - Client network-origin extraction for request handlers

pub mod client;
pub mod clock;

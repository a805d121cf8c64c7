//! Value Object Module

pub mod search_query;

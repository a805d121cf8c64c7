//! Application Configuration
//!
//! Configuration for the user directory application layer.

/// User directory configuration
#[derive(Debug, Clone)]
pub struct UserConfig {
    /// Maximum number of users a search returns
    pub search_limit: usize,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self { search_limit: 10 }
    }
}

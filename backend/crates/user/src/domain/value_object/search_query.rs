//! Search Query Value Object
//!
//! A user-directory search string that passed the minimum length check.

use crate::error::{UserError, UserResult};

/// Minimum number of characters a search string must have
pub const MIN_QUERY_CHARS: usize = 3;

/// Validated search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> UserResult<Self> {
        let raw = raw.into();
        if raw.chars().count() < MIN_QUERY_CHARS {
            return Err(UserError::QueryTooShort {
                min: MIN_QUERY_CHARS,
            });
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased query for in-process matching
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// `ILIKE` pattern matching the query as a literal substring.
    ///
    /// `%`, `_` and `\` are escaped with Postgres' default LIKE escape.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for c in self.raw.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

//! Domain Value Objects
//!
//! Immutable value types for the interaction domain.

use std::fmt;

/// Declared interaction classification.
///
/// Free-form, but never blank. Only [`InteractionType::OFFICE`] changes the
/// score; `"Remote"` and every other value are neutral. Matching is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionType(String);

impl InteractionType {
    pub const OFFICE: &'static str = "Office";

    /// `None` for an empty or whitespace-only value
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_office(&self) -> bool {
        self.0 == Self::OFFICE
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network origin as asserted by the caller.
///
/// Not derived from the transport and not a security signal; it is kept
/// verbatim (trimmed) because it feeds the score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(String);

impl ClientIp {
    /// `None` for an empty or whitespace-only value
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interaction score, fixed at write time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Declared "Office" from somewhere other than the office
    Penalty,
    /// Remote work or an unscored type
    Neutral,
    /// Declared "Office" from the office network
    Credit,
}

impl Score {
    pub fn value(self) -> i16 {
        match self {
            Score::Penalty => -1,
            Score::Neutral => 0,
            Score::Credit => 1,
        }
    }
}

impl TryFrom<i16> for Score {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Score::Penalty),
            0 => Ok(Score::Neutral),
            1 => Ok(Score::Credit),
            other => Err(other),
        }
    }
}

impl From<Score> for i16 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

//! Application Configuration
//!
//! Configuration for the interaction application layer.

use chrono_tz::Tz;

/// Office network address that earns a positive score
pub const DEFAULT_OFFICE_IP: &str = "177.230.219.9";

/// Interaction configuration
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    /// Client IP that counts as "at the office"
    pub office_ip: String,
    /// Zone in which "today" and the stored civil date are computed
    pub business_timezone: Tz,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            office_ip: DEFAULT_OFFICE_IP.to_string(),
            business_timezone: chrono_tz::America::Mexico_City,
        }
    }
}

impl InteractionConfig {
    pub fn with_office_ip(mut self, office_ip: impl Into<String>) -> Self {
        self.office_ip = office_ip.into();
        self
    }

    pub fn with_business_timezone(mut self, business_timezone: Tz) -> Self {
        self.business_timezone = business_timezone;
        self
    }
}

//! Domain Services
//!
//! Pure domain logic: the scoring rule and civil-date arithmetic.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::domain::value_objects::{ClientIp, InteractionType, Score};

/// Accepted format for dates in paths and in storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Score an interaction.
///
/// Office from the office IP earns a credit, Office from anywhere else a
/// penalty; Remote and every other type are neutral.
pub fn calculate_score(
    interaction_type: &InteractionType,
    client_ip: &ClientIp,
    office_ip: &str,
) -> Score {
    if interaction_type.is_office() {
        if client_ip.as_str() == office_ip {
            Score::Credit
        } else {
            Score::Penalty
        }
    } else {
        Score::Neutral
    }
}

/// Civil date of `instant` in `tz`
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_civil_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

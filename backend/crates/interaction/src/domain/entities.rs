//! Domain Entities
//!
//! Core business entities for the interaction domain.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use kernel::id::{InteractionId, UserId};

use crate::domain::services::{calculate_score, civil_date};
use crate::domain::value_objects::{ClientIp, InteractionType, Score};

/// Copy of a user's display fields taken when an interaction is written.
///
/// Later edits to the user profile do not reach stored interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub user_id: UserId,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl From<user::User> for UserSnapshot {
    fn from(user: user::User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Deletion state of a stored interaction relative to a given civil day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// Created today; may still be deleted
    Active,
    /// Created on another day; permanently immutable
    Locked,
}

/// Interaction entity - one recorded interaction between two users
#[derive(Debug, Clone)]
pub struct Interaction {
    pub id: InteractionId,
    pub user: UserSnapshot,
    pub interacting_user: UserSnapshot,
    pub interaction_type: InteractionType,
    pub client_ip: ClientIp,
    /// Civil date in the business timezone at write time
    pub date: NaiveDate,
    pub score: Score,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Record a new interaction at `now`, scoring it and stamping the
    /// civil date in the business timezone.
    pub fn record(
        user: UserSnapshot,
        interacting_user: UserSnapshot,
        interaction_type: InteractionType,
        client_ip: ClientIp,
        office_ip: &str,
        now: DateTime<Utc>,
        business_timezone: Tz,
    ) -> Self {
        let score = calculate_score(&interaction_type, &client_ip, office_ip);
        Self {
            id: InteractionId::new(),
            user,
            interacting_user,
            interaction_type,
            client_ip,
            date: civil_date(now, business_timezone),
            score,
            created_at: now,
        }
    }

    /// State of this record as seen on `today`
    pub fn state_on(&self, today: NaiveDate) -> RecordState {
        if self.date == today {
            RecordState::Active
        } else {
            RecordState::Locked
        }
    }
}

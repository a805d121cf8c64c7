//! API DTOs (Data Transfer Objects)
//!
//! Request bodies stay untyped `serde_json::Value` until the batch
//! validator has run; only responses are modelled here.

use serde::Serialize;

use crate::application::list_interactions::DailyInteractions;
use crate::application::record_interactions::CreatedRecord;
use crate::domain::entities::{Interaction, UserSnapshot};
use crate::domain::services::DATE_FORMAT;

pub const SAVED_MESSAGE: &str = "Interactions saved successfully.";
pub const DELETED_MESSAGE: &str = "Interaction deleted successfully.";

/// A user as embedded in interaction responses
#[derive(Debug, Clone, Serialize)]
pub struct UserSnapshotResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl From<UserSnapshot> for UserSnapshotResponse {
    fn from(snapshot: UserSnapshot) -> Self {
        Self {
            id: snapshot.user_id.to_string(),
            name: snapshot.name,
            last_name: snapshot.last_name,
            email: snapshot.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedRecordResponse {
    pub id: String,
    pub interacting_with_user: UserSnapshotResponse,
}

impl From<CreatedRecord> for CreatedRecordResponse {
    fn from(record: CreatedRecord) -> Self {
        Self {
            id: record.id.to_string(),
            interacting_with_user: record.interacting_with_user.into(),
        }
    }
}

/// POST /users/{user_id}/interactions
#[derive(Debug, Clone, Serialize)]
pub struct SaveInteractionsResponse {
    pub message: String,
    pub created_records: Vec<CreatedRecordResponse>,
}

impl SaveInteractionsResponse {
    pub fn new(records: Vec<CreatedRecord>) -> Self {
        Self {
            message: SAVED_MESSAGE.to_string(),
            created_records: records.into_iter().map(Into::into).collect(),
        }
    }
}

/// One entry of a daily listing
#[derive(Debug, Clone, Serialize)]
pub struct InteractionView {
    pub id: String,
    #[serde(rename = "interactionType")]
    pub interaction_type: String,
    #[serde(rename = "clientIP")]
    pub client_ip: String,
    pub score: i16,
    pub interacting_user: UserSnapshotResponse,
}

impl From<Interaction> for InteractionView {
    fn from(interaction: Interaction) -> Self {
        Self {
            id: interaction.id.to_string(),
            interaction_type: interaction.interaction_type.as_str().to_string(),
            client_ip: interaction.client_ip.as_str().to_string(),
            score: interaction.score.value(),
            interacting_user: interaction.interacting_user.into(),
        }
    }
}

/// GET /users/{user_id}/interactions/{date}
#[derive(Debug, Clone, Serialize)]
pub struct InteractionListResponse {
    pub user_id: String,
    pub date: String,
    pub interactions: Vec<InteractionView>,
}

impl From<DailyInteractions> for InteractionListResponse {
    fn from(daily: DailyInteractions) -> Self {
        Self {
            user_id: daily.user_id,
            date: daily.date.format(DATE_FORMAT).to_string(),
            interactions: daily.interactions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

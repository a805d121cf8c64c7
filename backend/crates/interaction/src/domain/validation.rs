//! Batch Validation
//!
//! Turns an untyped batch-save payload into a [`ValidatedBatch`] or names
//! the first rule it breaks. Synchronous, no I/O.
//!
//! Rules, checked in order:
//! 1. `user` is present (an object with an `id`, or a bare id string)
//! 2. `clientIP` is present and not blank
//! 3. `interactions` is a non-empty array
//! 4. every element is an object
//! 5. every element names its counterpart (`interacting_with_user` object
//!    with an `id`, or `interacting_with_user_id`)
//! 6. every element has a non-blank `interactionType`
//!
//! Rules 4-6 run element by element, so the reported index is the first
//! element that fails any of them. Identifiers are only parsed once every
//! structural rule holds; a malformed id never hides a later missing field.

use kernel::id::UserId;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::value_objects::{ClientIp, InteractionType};

/// One interaction of a validated batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionInput {
    pub interacting_with: UserId,
    pub interaction_type: InteractionType,
}

/// A structurally complete batch-save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch {
    pub acting_user: UserId,
    pub client_ip: ClientIp,
    pub interactions: Vec<InteractionInput>,
}

/// The first violated rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Payload must be a JSON object.")]
    NotAnObject,

    #[error("User object is required in the payload.")]
    MissingUser,

    #[error("Payload is missing 'clientIP' field.")]
    MissingClientIp,

    #[error("Interactions must be a non-empty list.")]
    EmptyInteractions,

    #[error("interactions[{index}] must be an object.")]
    MalformedInteraction { index: usize },

    #[error(
        "interactions[{index}] must include a valid interacting_with_user object or interacting_with_user_id."
    )]
    MissingCounterpart { index: usize },

    #[error("interactions[{index}] is missing the 'interactionType' field or it is empty.")]
    MissingInteractionType { index: usize },

    #[error("'{value}' is not a valid user id.")]
    InvalidUserId { value: String },
}

/// Validate a raw batch-save payload
pub fn validate_batch(payload: &Value) -> Result<ValidatedBatch, ValidationError> {
    let body = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    // 1
    let acting_user = user_reference(body.get("user")).ok_or(ValidationError::MissingUser)?;

    // 2
    let client_ip = body
        .get("clientIP")
        .and_then(Value::as_str)
        .and_then(ClientIp::new)
        .ok_or(ValidationError::MissingClientIp)?;

    // 3
    let elements = body
        .get("interactions")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::EmptyInteractions)?;

    // 4-6
    let raw = elements
        .iter()
        .enumerate()
        .map(|(index, element)| validate_element(index, element))
        .collect::<Result<Vec<_>, _>>()?;

    let acting_user = parse_user_id(acting_user)?;
    let interactions = raw
        .into_iter()
        .map(|(counterpart, interaction_type)| {
            Ok(InteractionInput {
                interacting_with: parse_user_id(counterpart)?,
                interaction_type,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ValidatedBatch {
        acting_user,
        client_ip,
        interactions,
    })
}

/// Counterpart reference and type of one element, ids still unparsed
fn validate_element(
    index: usize,
    element: &Value,
) -> Result<(&str, InteractionType), ValidationError> {
    // 4
    let record = element
        .as_object()
        .ok_or(ValidationError::MalformedInteraction { index })?;

    // 5
    let counterpart =
        counterpart_reference(record).ok_or(ValidationError::MissingCounterpart { index })?;

    // 6
    let interaction_type = record
        .get("interactionType")
        .and_then(Value::as_str)
        .and_then(InteractionType::new)
        .ok_or(ValidationError::MissingInteractionType { index })?;

    Ok((counterpart, interaction_type))
}

/// `{"id": "..."}` or `"..."`
fn user_reference(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(id) => non_blank(id),
        Value::Object(user) => user.get("id").and_then(Value::as_str).and_then(non_blank),
        _ => None,
    }
}

fn counterpart_reference(record: &Map<String, Value>) -> Option<&str> {
    record
        .get("interacting_with_user")
        .filter(|value| value.is_object())
        .and_then(|value| user_reference(Some(value)))
        .or_else(|| {
            record
                .get("interacting_with_user_id")
                .and_then(Value::as_str)
                .and_then(non_blank)
        })
}

fn non_blank(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

fn parse_user_id(value: &str) -> Result<UserId, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidUserId {
        value: value.to_string(),
    })
}

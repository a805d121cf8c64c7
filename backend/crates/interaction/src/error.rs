//! Interaction Error Types
//!
//! This module provides interaction-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Interaction-specific result type alias
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Interaction error variants
#[derive(Debug, Error)]
pub enum InteractionError {
    // ========================================================================
    // Invalid argument (400)
    // ========================================================================
    /// Batch payload broke a validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Payload user differs from the path user
    #[error("The user in the payload does not match the user in the path.")]
    UserMismatch,

    /// Date path segment is not `YYYY-MM-DD`
    #[error("Invalid date format '{0}'.")]
    InvalidDate(String),

    /// Body is not JSON
    #[error("Invalid JSON payload: {0}")]
    Payload(#[from] JsonRejection),

    // ========================================================================
    // Not found (404)
    // ========================================================================
    #[error("User {0} not found.")]
    UserNotFound(UserId),

    #[error("Interacting user {0} not found.")]
    CounterpartNotFound(UserId),

    #[error("Interaction not found.")]
    InteractionNotFound,

    // ========================================================================
    // Forbidden (403)
    // ========================================================================
    /// Deletion attempted on a day other than the creation day
    #[error("Interaction can only be deleted on the day it was created.")]
    NotSameDay {
        created_on: NaiveDate,
        today: NaiveDate,
    },

    // ========================================================================
    // Unexpected (500 unless the directory says otherwise)
    // ========================================================================
    #[error(transparent)]
    UserDirectory(#[from] user::UserError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored row violates a domain invariant
    #[error("Corrupt interaction record: {0}")]
    CorruptRecord(String),
}

impl InteractionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InteractionError::Validation(_)
            | InteractionError::UserMismatch
            | InteractionError::InvalidDate(_)
            | InteractionError::Payload(_) => StatusCode::BAD_REQUEST,

            InteractionError::UserNotFound(_)
            | InteractionError::CounterpartNotFound(_)
            | InteractionError::InteractionNotFound => StatusCode::NOT_FOUND,

            InteractionError::NotSameDay { .. } => StatusCode::FORBIDDEN,

            InteractionError::UserDirectory(e) => e.status_code(),

            InteractionError::Database(_) | InteractionError::CorruptRecord(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InteractionError::Validation(_)
            | InteractionError::UserMismatch
            | InteractionError::InvalidDate(_)
            | InteractionError::Payload(_) => ErrorKind::BadRequest,

            InteractionError::UserNotFound(_)
            | InteractionError::CounterpartNotFound(_)
            | InteractionError::InteractionNotFound => ErrorKind::NotFound,

            InteractionError::NotSameDay { .. } => ErrorKind::Forbidden,

            InteractionError::UserDirectory(e) => e.kind(),

            InteractionError::Database(_) | InteractionError::CorruptRecord(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            InteractionError::Payload(rejection) => AppError::from(rejection),
            InteractionError::Database(e) => AppError::from(e),
            InteractionError::UserDirectory(e) => e.into_app_error(),
            InteractionError::InvalidDate(_) => {
                AppError::new(ErrorKind::BadRequest, self.to_string())
                    .with_action("Use 'YYYY-MM-DD'.")
            }
            InteractionError::CorruptRecord(_) => {
                AppError::internal("Stored interaction could not be read")
            }
            other => match other.kind() {
                ErrorKind::NotFound => AppError::not_found(other.to_string()),
                ErrorKind::Forbidden => AppError::forbidden(other.to_string()),
                ErrorKind::BadRequest => AppError::bad_request(other.to_string()),
                kind => AppError::new(kind, other.to_string()),
            },
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            InteractionError::Database(e) => {
                tracing::error!(error = %e, "Interaction database error");
            }
            InteractionError::CorruptRecord(detail) => {
                tracing::error!(detail = %detail, "Corrupt interaction record");
            }
            InteractionError::UserDirectory(e) => {
                tracing::error!(error = %e, "User directory failure while recording");
            }
            InteractionError::NotSameDay { created_on, today } => {
                tracing::warn!(
                    created_on = %created_on,
                    today = %today,
                    "Rejected deletion of a locked interaction"
                );
            }
            InteractionError::UserNotFound(id) | InteractionError::CounterpartNotFound(id) => {
                tracing::info!(user_id = %id, error = %self, "Unknown user in batch");
            }
            _ => {
                tracing::debug!(error = %self, "Interaction request rejected");
            }
        }
    }
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

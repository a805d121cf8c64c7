//! User Error Types
//!
//! This module provides user-directory error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-directory error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Search query below the minimum length
    #[error("Search string must be at least {min} characters")]
    QueryTooShort { min: usize },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::QueryTooShort { .. } => StatusCode::BAD_REQUEST,
            UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::QueryTooShort { .. } => ErrorKind::BadRequest,
            UserError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping database details out of the message
    pub fn into_app_error(self) -> AppError {
        match self {
            UserError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User directory database error");
            }
            UserError::QueryTooShort { .. } => {
                tracing::debug!(error = %self, "Rejected user search");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

//! Q&A Error Types
//!
//! This module provides Q&A-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Q&A-specific result type alias
pub type QaResult<T> = Result<T, QaError>;

/// Q&A-specific error variants
///
/// The `*Failed` variants carry the client-facing message; the underlying
/// cause is logged where it occurs.
#[derive(Debug, Error)]
pub enum QaError {
    /// Unknown or malformed question ID
    #[error("Question not found")]
    QuestionNotFound,

    #[error("Failed to create question")]
    CreateQuestionFailed,

    #[error("Failed to fetch questions")]
    FetchQuestionsFailed,

    #[error("Failed to create answer")]
    CreateAnswerFailed,

    #[error("Failed to fetch answers")]
    FetchAnswersFailed,

    /// Field outside its allowed bounds
    #[error("{0}")]
    InvalidInput(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QaError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QaError::QuestionNotFound => ErrorKind::NotFound,
            QaError::InvalidInput(_) => ErrorKind::BadRequest,
            QaError::CreateQuestionFailed
            | QaError::FetchQuestionsFailed
            | QaError::CreateAnswerFailed
            | QaError::FetchAnswersFailed
            | QaError::Database(_)
            | QaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QaError::Database(e) => {
                tracing::error!(error = %e, "Q&A database error");
            }
            QaError::Internal(msg) => {
                tracing::error!(message = %msg, "Q&A internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Q&A error");
            }
        }
    }
}

impl From<QaError> for AppError {
    fn from(err: QaError) -> Self {
        match err {
            QaError::Database(_) | QaError::Internal(_) => {
                AppError::new(err.kind(), "Internal Server Error")
            }
            _ => AppError::new(err.kind(), err.to_string()),
        }
    }
}

impl IntoResponse for QaError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

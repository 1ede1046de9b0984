//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization header missing or not a bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Bearer token failed signature or expiry verification
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    /// Registration could not be persisted
    #[error("Failed to create user")]
    CreateFailed,

    /// Login could not complete for a reason other than credentials
    #[error("Login failed")]
    LoginFailed,

    #[error("Failed to fetch users")]
    FetchFailed,

    /// Server-side misconfiguration (e.g. signing secret not set)
    #[error("Internal Server Error")]
    Config(String),

    /// Email failed format validation
    #[error("{0}")]
    InvalidEmail(String),

    /// Password validation error
    #[error("{0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Unauthorized
            | AuthError::InvalidOrExpiredToken
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidEmail(_) | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::CreateFailed
            | AuthError::LoginFailed
            | AuthError::FetchFailed
            | AuthError::Config(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database and internal details stay in the logs; clients get a
    /// generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal Server Error")
            }
            AuthError::PasswordValidation(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Please choose a different password"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Config(msg) => {
                tracing::error!(message = %msg, "Auth misconfiguration");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidOrExpiredToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

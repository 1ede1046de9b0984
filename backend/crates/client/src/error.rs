//! Client Errors

use reqwest::StatusCode;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx response; `message` is the server's `error` field when present
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Server answered 2xx with an empty array where one row was expected
    #[error("Empty response")]
    EmptyResponse,

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of an `Api` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Authenticated caller identity
//!
//! The bearer middleware inserts an [`AuthenticatedUser`] into the request
//! extensions; handlers behind it take it as an extractor argument.

use serde::Serialize;

use crate::id::UserId;

/// Identity carried by a verified access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// Subject claim
    pub user_id: UserId,
    pub name: String,
    pub display_id: String,
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| crate::error::app_error::AppError::unauthorized("Unauthorized"))
    }
}

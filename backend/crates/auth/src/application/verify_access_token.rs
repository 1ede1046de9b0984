//! Verify Access Token Use Case
//!
//! Turns a bearer token into the caller identity. Stateless: no store access.

use std::sync::Arc;

use kernel::identity::AuthenticatedUser;

use crate::application::config::AuthConfig;
use crate::domain::value_object::access_claims::AccessClaims;
use crate::error::{AuthError, AuthResult};

pub struct VerifyAccessTokenUseCase {
    config: Arc<AuthConfig>,
}

impl VerifyAccessTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        let secret = self.config.signing_secret()?;

        let claims: AccessClaims = platform::token::verify(token, secret).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidOrExpiredToken
        })?;

        claims
            .into_identity()
            .map_err(|_| AuthError::InvalidOrExpiredToken)
    }
}

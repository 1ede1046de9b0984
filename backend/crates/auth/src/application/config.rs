//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret; login and protected routes fail with 500 while unset
    pub jwt_secret: Option<String>,
    /// Access token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: Duration::from_secs(24 * 3600),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        let secret = platform::crypto::to_base64_url(&platform::crypto::random_bytes(32));
        Self::with_secret(secret)
    }

    /// Signing secret, or a configuration error when missing or empty
    pub fn signing_secret(&self) -> AuthResult<&[u8]> {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret.as_bytes()),
            _ => Err(AuthError::Config("JWT_SECRET is not set".to_string())),
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

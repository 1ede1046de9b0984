//! Signed Access Tokens
//!
//! HS256 JSON Web Tokens over caller-defined claims. The claims type must
//! carry an `exp` field (seconds since epoch); verification rejects tokens
//! whose `exp` is in the past. No leeway is granted.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Sign claims with a shared secret
pub fn sign<C: Serialize>(claims: &C, secret: &[u8]) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify signature and expiry, returning the decoded claims
pub fn verify<C: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<C, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<C>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })
}

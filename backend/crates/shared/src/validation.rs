//! Request validation
//!
//! Request bodies are parsed and validated into typed structs before a
//! handler body runs. A body type implements [`Validate`]; handlers take
//! `ValidatedJson<T>` (feature `axum`) instead of `Json<T>`.
//!
//! ```rust
//! use kernel::validation::{Validate, ValidationErrors};
//!
//! struct NewTag {
//!     label: String,
//! }
//!
//! impl Validate for NewTag {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.check_length("label", &self.label, 1, 32);
//!         errors.into_result()
//!     }
//! }
//!
//! assert!(NewTag { label: "rust".into() }.validate().is_ok());
//! assert!(NewTag { label: String::new() }.validate().is_err());
//! ```

use std::fmt;

use crate::error::app_error::AppError;

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// A body that can check its own field constraints
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// One failed constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated field issues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) -> &mut Self {
        self.issues.push(FieldIssue {
            field,
            message: message.into(),
        });
        self
    }

    /// Value must contain at least one non-whitespace character
    pub fn require_non_blank(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, "is required");
        }
        self
    }

    /// Length in characters must lie within `min..=max`
    pub fn check_length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        max: usize,
    ) -> &mut Self {
        let len = value.chars().count();
        if len < min {
            self.add(field, format!("must be at least {} characters", min));
        } else if len > max {
            self.add(field, format!("must be at most {} characters", max));
        }
        self
    }

    pub fn check_email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.add(field, "must be a valid email address");
        }
        self
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.issues.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = errors.issues.iter().map(|i| i.to_string()).collect();
        AppError::bad_request("Validation failed").with_details(details)
    }
}

/// Basic email format check (trimmed, case-insensitive)
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    !(domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains(".."))
}

#[cfg(feature = "axum")]
pub use extractor::ValidatedJson;

#[cfg(feature = "axum")]
mod extractor {
    use axum::Json;
    use axum::extract::{FromRequest, Request};
    use serde::de::DeserializeOwned;

    use super::Validate;
    use crate::error::app_error::AppError;

    /// JSON body that has been deserialized and validated
    #[derive(Debug, Clone)]
    pub struct ValidatedJson<T>(pub T);

    impl<S, T> FromRequest<S> for ValidatedJson<T>
    where
        T: DeserializeOwned + Validate,
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request("Invalid request body")
                        .with_details(vec![rejection.body_text()])
                })?;

            value.validate()?;

            Ok(Self(value))
        }
    }
}

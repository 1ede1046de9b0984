//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers for users, questions and answers
//! - The authenticated caller identity handed from middleware to handlers
//! - Request body validation (`Validate` + `ValidatedJson`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod identity;
pub mod validation;

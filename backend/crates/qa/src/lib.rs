//! Q&A (Questions and Answers) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Access Model
//! - Every route expects a `kernel::identity::AuthenticatedUser` in the request
//!   extensions (attached by the bearer middleware of the `auth` crate)
//! - The caller identity is logged but not stored with questions or answers
//! - No update, delete, pagination, or ownership checks

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{QaError, QaResult};
pub use infra::{memory::InMemoryQaRepository, postgres::PgQaRepository};
pub use presentation::router::qa_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;

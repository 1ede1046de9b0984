//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - User registration with display ID, name, email and password
//! - Email + password login issuing a signed bearer token (HS256 JWT)
//! - Bearer middleware attaching the caller identity to requests
//! - Public user listing and lookup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; legacy SHA-256 digests upgraded on login
//! - Tokens are stateless: no refresh, no revocation
//! - Unknown email and wrong password are indistinguishable to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::{BearerAuthState, require_bearer};
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

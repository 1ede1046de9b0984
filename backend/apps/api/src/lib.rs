//! API Server Library
//!
//! Router assembly and configuration, shared by the binary and the
//! integration tests.

pub mod app;
pub mod config;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

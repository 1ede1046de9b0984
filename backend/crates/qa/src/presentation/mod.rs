//! Presentation Layer - HTTP handlers and DTOs

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::QaAppState;
pub use router::qa_router_generic;

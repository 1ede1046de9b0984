//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

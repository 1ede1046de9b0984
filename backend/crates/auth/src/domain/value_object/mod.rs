//! Value Object Module

pub mod access_claims;
pub mod email;
pub mod user_password;

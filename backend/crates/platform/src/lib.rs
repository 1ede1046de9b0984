//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time comparison, random bytes)
//! - Password hashing (Argon2id, with verification of legacy SHA-256 digests)
//! - Signed access tokens (HS256 JWT)

pub mod crypto;
pub mod password;
pub mod token;

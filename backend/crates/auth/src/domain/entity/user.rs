//! User Entity
//!
//! Registered account. The password hash never leaves the server; see
//! `presentation::dto::UserResponse` for the public projection.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// UUID v4 identifier, also the token subject
    pub id: UserId,
    /// User-chosen handle shown next to the name
    pub display_id: String,
    pub name: String,
    /// Unique, stored lower case
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(display_id: String, name: String, email: Email, password_hash: UserPassword) -> Self {
        Self {
            id: UserId::new(),
            display_id,
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Replace the stored hash (e.g. after upgrading a legacy digest)
    pub fn set_password_hash(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
    }
}

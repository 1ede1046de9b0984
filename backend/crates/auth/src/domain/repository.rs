//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; fails if the email is already registered
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// All users, oldest first
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Replace the stored password hash
    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()>;
}

//! In-memory Repository Implementation
//!
//! Used when no database is configured and by tests. Data is lost on restart.

use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Vec-backed user store, insertion ordered
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        // Mirrors the UNIQUE constraint on users.email
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::Internal(format!(
                "duplicate key value violates unique constraint on email ({})",
                user.id
            )));
        }

        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<()> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| &u.id == user_id) {
            Some(user) => {
                user.set_password_hash(password_hash.clone());
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }
}

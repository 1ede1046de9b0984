//! Find Users Use Case
//!
//! Public user reads: listing and lookup by ID.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct FindUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> FindUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// All users, oldest first
    pub async fn list(&self) -> AuthResult<Vec<User>> {
        self.user_repo.list().await.map_err(|e| {
            tracing::error!(error = %e, "User listing failed");
            AuthError::FetchFailed
        })
    }

    /// Look up by path ID; unparsable IDs and store failures read as not found
    pub async fn find_by_id(&self, raw_id: &str) -> AuthResult<User> {
        let user_id: UserId = raw_id.parse().map_err(|_| AuthError::UserNotFound)?;

        match self.user_repo.find_by_id(&user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AuthError::UserNotFound),
            Err(e) => {
                tracing::error!(error = %e, user_id = %user_id, "User lookup failed");
                Err(AuthError::UserNotFound)
            }
        }
    }
}

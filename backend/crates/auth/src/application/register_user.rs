//! Register User Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterUserInput {
    pub display_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<User> {
        let email = Email::new(input.email)
            .map_err(|e| AuthError::InvalidEmail(e.message().to_string()))?;

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(input.display_id, input.name, email, password_hash);

        // Duplicate email surfaces here as a store error
        if let Err(e) = self.user_repo.create(&user).await {
            tracing::error!(error = %e, "User insert failed");
            return Err(AuthError::CreateFailed);
        }

        tracing::info!(user_id = %user.id, display_id = %user.display_id, "User registered");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn input(email: &str, password: &str) -> RegisterUserInput {
        RegisterUserInput {
            display_id: "alice01".to_string(),
            name: "Alice".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn use_case(repo: &Arc<InMemoryUserRepository>) -> RegisterUserUseCase<InMemoryUserRepository> {
        RegisterUserUseCase::new(repo.clone(), Arc::new(AuthConfig::development()))
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = use_case(&repo)
            .execute(input("Alice@Example.com", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(user.email.as_str(), "alice@example.com");
        assert!(user.password_hash.as_str().starts_with("$argon2id$"));
        assert!(!user.password_hash.as_str().contains("s3cret-pass"));
    }

    #[tokio::test]
    async fn test_duplicate_email_fails() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = use_case(&repo);
        use_case.execute(input("a@example.com", "pw-one")).await.unwrap();

        let err = use_case
            .execute(input("A@EXAMPLE.COM", "pw-two"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::CreateFailed));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_password_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let err = use_case(&repo)
            .execute(input("a@example.com", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}

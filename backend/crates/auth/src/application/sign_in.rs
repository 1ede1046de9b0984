//! Sign In Use Case
//!
//! Authenticates a user by email and password and issues an access token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    access_claims::AccessClaims,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[cfg_attr(test, derive(Debug))]
pub struct SignInOutput {
    /// Signed HS256 access token
    pub token: String,
    pub user: User,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match self.user_repo.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed during login");
                return Err(AuthError::LoginFailed);
            }
        };

        let raw_password = RawPassword::for_login(input.password);
        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        if user.password_hash.needs_rehash() {
            self.upgrade_hash(&user, &raw_password).await;
        }

        let secret = self.config.signing_secret()?;

        let claims = AccessClaims::for_user(&user, Utc::now(), self.config.token_ttl);
        let token = platform::token::sign(&claims, secret).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            AuthError::LoginFailed
        })?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput { token, user })
    }

    /// Replace a legacy digest with Argon2id; failures do not block login
    async fn upgrade_hash(&self, user: &User, raw_password: &RawPassword) {
        let upgraded = match UserPassword::from_raw(raw_password, self.config.pepper()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Password rehash failed");
                return;
            }
        };

        match self
            .user_repo
            .update_password_hash(&user.id, &upgraded)
            .await
        {
            Ok(()) => tracing::info!(user_id = %user.id, "Upgraded legacy password hash"),
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Failed to store upgraded password hash")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
    use crate::infra::memory::InMemoryUserRepository;
    use platform::password::legacy_sha256_hex;

    async fn registered(repo: &Arc<InMemoryUserRepository>, config: &Arc<AuthConfig>) -> User {
        RegisterUserUseCase::new(repo.clone(), config.clone())
            .execute(RegisterUserInput {
                display_id: "bob".to_string(),
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap()
    }

    fn input(email: &str, password: &str) -> SignInInput {
        SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_issues_token_for_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());
        let user = registered(&repo, &config).await;

        let output = SignInUseCase::new(repo.clone(), config.clone())
            .execute(input("BOB@example.com", "correct horse"))
            .await
            .unwrap();

        let claims: AccessClaims =
            platform::token::verify(&output.token, config.signing_secret().unwrap()).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.display_id, "bob");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(output.user.id, user.id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());
        registered(&repo, &config).await;
        let use_case = SignInUseCase::new(repo.clone(), config.clone());

        let wrong = use_case
            .execute(input("bob@example.com", "battery staple"))
            .await
            .unwrap_err();
        let unknown = use_case
            .execute(input("nobody@example.com", "correct horse"))
            .await
            .unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_missing_secret_after_valid_credentials() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::default());
        registered(&repo, &config).await;

        let use_case = SignInUseCase::new(repo.clone(), config);
        let err = use_case
            .execute(input("bob@example.com", "correct horse"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));

        let err = use_case
            .execute(input("bob@example.com", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_legacy_hash_upgraded_on_login() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());
        let legacy = User::new(
            "carol".to_string(),
            "Carol".to_string(),
            Email::new("carol@example.com").unwrap(),
            UserPassword::from_db(legacy_sha256_hex("old password")).unwrap(),
        );
        repo.create(&legacy).await.unwrap();

        SignInUseCase::new(repo.clone(), config.clone())
            .execute(input("carol@example.com", "old password"))
            .await
            .unwrap();

        let stored = repo.find_by_id(&legacy.id).await.unwrap().unwrap();
        assert!(!stored.password_hash.needs_rehash());
        assert!(stored.password_hash.as_str().starts_with("$argon2id$"));

        // Still logs in with the same password after the upgrade
        SignInUseCase::new(repo.clone(), config)
            .execute(input("carol@example.com", "old password"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_legacy_hash_of_unnormalized_password_upgraded() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::development());
        let typed = "ｐａｓｓｗｏｒｄ①";
        let legacy = User::new(
            "dan".to_string(),
            "Dan".to_string(),
            Email::new("dan@example.com").unwrap(),
            UserPassword::from_db(legacy_sha256_hex(typed)).unwrap(),
        );
        repo.create(&legacy).await.unwrap();

        SignInUseCase::new(repo.clone(), config.clone())
            .execute(input("dan@example.com", typed))
            .await
            .unwrap();

        let stored = repo.find_by_id(&legacy.id).await.unwrap().unwrap();
        assert!(stored.password_hash.as_str().starts_with("$argon2id$"));

        SignInUseCase::new(repo.clone(), config)
            .execute(input("dan@example.com", typed))
            .await
            .unwrap();
    }
}

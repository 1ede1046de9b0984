//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod find_users;
pub mod register_user;
pub mod sign_in;
pub mod verify_access_token;

// Re-exports
pub use config::AuthConfig;
pub use find_users::FindUsersUseCase;
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use verify_access_token::VerifyAccessTokenUseCase;

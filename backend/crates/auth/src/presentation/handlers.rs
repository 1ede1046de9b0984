//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

use kernel::validation::ValidatedJson;

use crate::application::config::AuthConfig;
use crate::application::{
    FindUsersUseCase, RegisterUserInput, RegisterUserUseCase, SignInInput, SignInUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, LoginUser, RegisterRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Users
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = FindUsersUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = FindUsersUseCase::new(state.repo.clone()).find_by_id(&id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// POST /users
///
/// Responds 200 with a one-element array holding the inserted row.
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterUserInput {
        display_id: req.display_id,
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(vec![UserResponse::from(&user)]))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: LoginUser::from(&output.user),
    }))
}

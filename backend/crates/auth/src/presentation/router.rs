//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
///
/// Routes: `GET /users`, `GET /users/{id}`, `POST /users`, `POST /login`.
/// None of them require a bearer token.
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::register::<R>),
        )
        .route("/users/{id}", get(handlers::get_user::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

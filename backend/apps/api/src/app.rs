//! Router Assembly

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, BearerAuthState, auth_router_generic, require_bearer};
use axum::{Router, middleware, routing::get};
use qa::domain::repository::{AnswerRepository, QuestionRepository};
use qa::qa_router_generic;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// GET /
async fn root() -> &'static str {
    "Hono!"
}

/// Build the full application router
///
/// `/users` and `/login` are public. Everything under `/questions` sits
/// behind the bearer middleware.
pub fn build_app<U, Q>(users: U, qa: Q, auth_config: AuthConfig, cors: CorsLayer) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let auth_config = Arc::new(auth_config);
    let bearer_state = BearerAuthState::new(auth_config.clone());

    let protected = qa_router_generic(qa)
        .route_layer(middleware::from_fn_with_state(bearer_state, require_bearer));

    Router::new()
        .route("/", get(root))
        .merge(auth_router_generic(users, auth_config))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

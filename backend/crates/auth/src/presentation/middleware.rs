//! Auth Middleware
//!
//! Bearer-token gate for protected routes.
//!
//! ```rust,ignore
//! let protected = Router::new()
//!     .route("/questions", get(list_questions))
//!     .route_layer(middleware::from_fn_with_state(bearer_state, require_bearer));
//! ```

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::VerifyAccessTokenUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub config: Arc<AuthConfig>,
}

impl BearerAuthState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires `Authorization: Bearer <token>`
///
/// On success the request carries a `kernel::identity::AuthenticatedUser`
/// extension. Requests without a bearer header are rejected before any
/// handler or store is touched.
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::Unauthorized)?;

    let identity = VerifyAccessTokenUseCase::new(state.config.clone()).execute(token)?;

    tracing::debug!(user_id = %identity.user_id, "Bearer token accepted");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Enabled with the `axum` feature.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl AppError {
    /// JSON body sent to clients: `{"error": ..., "details"?: [...], "action"?: ...}`
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "error": self.message() });
        if !self.details().is_empty() {
            body["details"] = serde_json::json!(self.details());
        }
        if let Some(action) = self.action() {
            body["action"] = serde_json::json!(action);
        }
        body
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            tracing::error!(error = %self, source = ?std::error::Error::source(&self), "Request failed");
        }

        (status, Json(self.to_body())).into_response()
    }
}

//! Q&A Router

use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::presentation::handlers::{self, QaAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the Q&A router for any repository implementation
///
/// The caller is expected to wrap the result in the bearer middleware.
pub fn qa_router_generic<R>(repo: R) -> Router
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let state = QaAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::create_question::<R>),
        )
        .route(
            "/questions/{question_id}/answers",
            get(handlers::list_answers::<R>).post(handlers::create_answer::<R>),
        )
        .with_state(state)
}

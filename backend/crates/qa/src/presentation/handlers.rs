//! HTTP Handlers
//!
//! Every handler takes an `AuthenticatedUser`, so a route mounted without the
//! bearer middleware answers 401 instead of serving anonymous callers.

use crate::application::{
    CreateAnswerInput, CreateAnswerUseCase, CreateQuestionInput, CreateQuestionUseCase,
    ListAnswersUseCase, ListQuestionsUseCase,
};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::QaResult;
use crate::presentation::dto::{
    AnswerResponse, CreateAnswerRequest, CreateQuestionRequest, QuestionResponse,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::identity::AuthenticatedUser;
use kernel::validation::ValidatedJson;
use std::sync::Arc;

/// Shared state for Q&A handlers
#[derive(Clone)]
pub struct QaAppState<R>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /questions
///
/// Responds 201 with a one-element array holding the inserted row.
pub async fn create_question<R>(
    State(state): State<QaAppState<R>>,
    user: AuthenticatedUser,
    ValidatedJson(req): ValidatedJson<CreateQuestionRequest>,
) -> QaResult<(StatusCode, Json<Vec<QuestionResponse>>)>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateQuestionUseCase::new(state.repo.clone());

    let input = CreateQuestionInput {
        title: req.title,
        content: req.content,
    };

    let question = use_case.execute(input, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(vec![QuestionResponse::from(&question)]),
    ))
}

/// GET /questions
pub async fn list_questions<R>(
    State(state): State<QaAppState<R>>,
    _user: AuthenticatedUser,
) -> QaResult<Json<Vec<QuestionResponse>>>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let questions = ListQuestionsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(questions.iter().map(QuestionResponse::from).collect()))
}

/// POST /questions/{questionId}/answers
///
/// Responds 201 with a one-element array holding the inserted row.
pub async fn create_answer<R>(
    State(state): State<QaAppState<R>>,
    Path(question_id): Path<String>,
    user: AuthenticatedUser,
    ValidatedJson(req): ValidatedJson<CreateAnswerRequest>,
) -> QaResult<(StatusCode, Json<Vec<AnswerResponse>>)>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateAnswerUseCase::new(state.repo.clone(), state.repo.clone());

    let input = CreateAnswerInput {
        question_id,
        content: req.content,
    };

    let answer = use_case.execute(input, &user).await?;

    Ok((StatusCode::CREATED, Json(vec![AnswerResponse::from(&answer)])))
}

/// GET /questions/{questionId}/answers
pub async fn list_answers<R>(
    State(state): State<QaAppState<R>>,
    Path(question_id): Path<String>,
    _user: AuthenticatedUser,
) -> QaResult<Json<Vec<AnswerResponse>>>
where
    R: QuestionRepository + AnswerRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListAnswersUseCase::new(state.repo.clone(), state.repo.clone());
    let answers = use_case.execute(&question_id).await?;
    Ok(Json(answers.iter().map(AnswerResponse::from).collect()))
}

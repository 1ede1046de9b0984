//! List Questions Use Case

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{QaError, QaResult};
use std::sync::Arc;

/// List Questions Use Case
pub struct ListQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> ListQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// All questions, oldest first
    pub async fn execute(&self) -> QaResult<Vec<Question>> {
        self.question_repo.list_questions().await.map_err(|e| {
            tracing::error!(error = %e, "Question listing failed");
            QaError::FetchQuestionsFailed
        })
    }
}

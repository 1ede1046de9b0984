//! List Answers Use Case

use crate::application::parse_question_id;
use crate::domain::entities::Answer;
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::{QaError, QaResult};
use std::sync::Arc;

/// List Answers Use Case
pub struct ListAnswersUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
}

impl<Q, A> ListAnswersUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    pub fn new(question_repo: Arc<Q>, answer_repo: Arc<A>) -> Self {
        Self {
            question_repo,
            answer_repo,
        }
    }

    /// Answers of a question, oldest first
    pub async fn execute(&self, raw_question_id: &str) -> QaResult<Vec<Answer>> {
        let question_id = parse_question_id(raw_question_id)?;

        let exists = self
            .question_repo
            .question_exists(&question_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, question_id = %question_id, "Question lookup failed");
                QaError::FetchAnswersFailed
            })?;
        if !exists {
            return Err(QaError::QuestionNotFound);
        }

        self.answer_repo
            .list_answers(&question_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, question_id = %question_id, "Answer listing failed");
                QaError::FetchAnswersFailed
            })
    }
}

//! Create Answer Use Case

use crate::application::parse_question_id;
use crate::domain::entities::Answer;
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_objects::PostContent;
use crate::error::{QaError, QaResult};
use kernel::identity::AuthenticatedUser;
use std::sync::Arc;

/// Input DTO for create answer
#[derive(Debug, Clone)]
pub struct CreateAnswerInput {
    /// Raw path segment
    pub question_id: String,
    pub content: String,
}

/// Create Answer Use Case
pub struct CreateAnswerUseCase<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    question_repo: Arc<Q>,
    answer_repo: Arc<A>,
}

impl<Q, A> CreateAnswerUseCase<Q, A>
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

    pub async fn execute(
        &self,
        input: CreateAnswerInput,
        author: &AuthenticatedUser,
    ) -> QaResult<Answer> {
        let question_id = parse_question_id(&input.question_id)?;
        let content = PostContent::new(input.content)?;

        match self.question_repo.question_exists(&question_id).await {
            Ok(true) => {}
            Ok(false) => return Err(QaError::QuestionNotFound),
            Err(e) => {
                tracing::error!(error = %e, question_id = %question_id, "Question lookup failed");
                return Err(QaError::CreateAnswerFailed);
            }
        }

        let answer = Answer::new(question_id, content);

        match self.answer_repo.create_answer(&answer).await {
            Ok(()) => {}
            Err(QaError::QuestionNotFound) => return Err(QaError::QuestionNotFound),
            Err(e) => {
                tracing::error!(error = %e, user_id = %author.user_id, "Answer insert failed");
                return Err(QaError::CreateAnswerFailed);
            }
        }

        tracing::info!(
            answer_id = %answer.id,
            question_id = %answer.question_id,
            user_id = %author.user_id,
            "Answer created"
        );

        Ok(answer)
    }
}

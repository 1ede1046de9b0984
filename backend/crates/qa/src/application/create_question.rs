//! Create Question Use Case

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::value_objects::{PostContent, QuestionTitle};
use crate::error::{QaError, QaResult};
use kernel::identity::AuthenticatedUser;
use std::sync::Arc;

/// Input DTO for create question
#[derive(Debug, Clone)]
pub struct CreateQuestionInput {
    pub title: String,
    pub content: String,
}

/// Create Question Use Case
pub struct CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(
        &self,
        input: CreateQuestionInput,
        author: &AuthenticatedUser,
    ) -> QaResult<Question> {
        let question = Question::new(
            QuestionTitle::new(input.title)?,
            PostContent::new(input.content)?,
        );

        if let Err(e) = self.question_repo.create_question(&question).await {
            tracing::error!(error = %e, user_id = %author.user_id, "Question insert failed");
            return Err(QaError::CreateQuestionFailed);
        }

        tracing::info!(
            question_id = %question.id,
            user_id = %author.user_id,
            "Question created"
        );

        Ok(question)
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::QuestionId;

use crate::domain::entities::{Answer, Question};
use crate::error::QaResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Insert a new question
    async fn create_question(&self, question: &Question) -> QaResult<()>;

    /// All questions, oldest first
    async fn list_questions(&self) -> QaResult<Vec<Question>>;

    /// Check if a question exists
    async fn question_exists(&self, question_id: &QuestionId) -> QaResult<bool>;
}

/// Answer repository trait
#[trait_variant::make(AnswerRepository: Send)]
pub trait LocalAnswerRepository {
    /// Insert a new answer
    ///
    /// Returns `QaError::QuestionNotFound` if the referenced question is gone.
    async fn create_answer(&self, answer: &Answer) -> QaResult<()>;

    /// Answers of one question, oldest first
    async fn list_answers(&self, question_id: &QuestionId) -> QaResult<Vec<Answer>>;
}

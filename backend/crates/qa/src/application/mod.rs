//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Each use case represents a single business operation.

pub mod create_answer;
pub mod create_question;
pub mod list_answers;
pub mod list_questions;

pub use create_answer::{CreateAnswerInput, CreateAnswerUseCase};
pub use create_question::{CreateQuestionInput, CreateQuestionUseCase};
pub use list_answers::ListAnswersUseCase;
pub use list_questions::ListQuestionsUseCase;

use crate::error::{QaError, QaResult};
use kernel::id::QuestionId;

/// Parse a question ID path segment; malformed IDs are reported as not found
pub(crate) fn parse_question_id(raw: &str) -> QaResult<QuestionId> {
    raw.parse().map_err(|_| QaError::QuestionNotFound)
}

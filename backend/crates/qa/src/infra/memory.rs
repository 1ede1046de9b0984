//! In-memory Repository Implementation
//!
//! Used when no database is configured and by tests. Data is lost on restart.

use std::sync::Arc;

use kernel::id::QuestionId;
use tokio::sync::RwLock;

use crate::domain::entities::{Answer, Question};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::error::{QaError, QaResult};

/// Vec-backed store, insertion ordered
#[derive(Clone, Default)]
pub struct InMemoryQaRepository {
    questions: Arc<RwLock<Vec<Question>>>,
    answers: Arc<RwLock<Vec<Answer>>>,
}

impl InMemoryQaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionRepository for InMemoryQaRepository {
    async fn create_question(&self, question: &Question) -> QaResult<()> {
        self.questions.write().await.push(question.clone());
        Ok(())
    }

    async fn list_questions(&self) -> QaResult<Vec<Question>> {
        Ok(self.questions.read().await.clone())
    }

    async fn question_exists(&self, question_id: &QuestionId) -> QaResult<bool> {
        let questions = self.questions.read().await;
        Ok(questions.iter().any(|q| &q.id == question_id))
    }
}

impl AnswerRepository for InMemoryQaRepository {
    async fn create_answer(&self, answer: &Answer) -> QaResult<()> {
        // Mirrors the answers.question_id foreign key
        let known = self
            .questions
            .read()
            .await
            .iter()
            .any(|q| q.id == answer.question_id);
        if !known {
            return Err(QaError::QuestionNotFound);
        }

        self.answers.write().await.push(answer.clone());
        Ok(())
    }

    async fn list_answers(&self, question_id: &QuestionId) -> QaResult<Vec<Answer>> {
        let answers = self.answers.read().await;
        Ok(answers
            .iter()
            .filter(|a| &a.question_id == question_id)
            .cloned()
            .collect())
    }
}

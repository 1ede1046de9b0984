//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Answer, Question};
use crate::domain::value_objects::{
    CONTENT_MAX_CHARS, CONTENT_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};

/// POST /questions body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
}

impl Validate for CreateQuestionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check_length("title", &self.title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)
            .check_length("content", &self.content, CONTENT_MIN_CHARS, CONTENT_MAX_CHARS);
        errors.into_result()
    }
}

/// POST /questions/{questionId}/answers body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnswerRequest {
    pub content: String,
}

impl Validate for CreateAnswerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("content", &self.content, CONTENT_MIN_CHARS, CONTENT_MAX_CHARS);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.to_string(),
            title: question.title.to_string(),
            content: question.content.to_string(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Answer> for AnswerResponse {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.to_string(),
            question_id: answer.question_id.to_string(),
            content: answer.content.to_string(),
            created_at: answer.created_at,
            updated_at: answer.updated_at,
        }
    }
}

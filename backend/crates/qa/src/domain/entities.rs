//! Domain Entities
//!
//! Core business entities for the Q&A domain.

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId};

use crate::domain::value_objects::{PostContent, QuestionTitle};

/// Question entity
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub title: QuestionTitle,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Create a new question
    pub fn new(title: QuestionTitle, content: PostContent) -> Self {
        let now = Utc::now();
        Self {
            id: QuestionId::new(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Answer entity - belongs to exactly one question
#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Answer {
    /// Create a new answer to a question
    pub fn new(question_id: QuestionId, content: PostContent) -> Self {
        let now = Utc::now();
        Self {
            id: AnswerId::new(),
            question_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Answer, Question};
use crate::domain::repository::{AnswerRepository, QuestionRepository};
use crate::domain::value_objects::{PostContent, QuestionTitle};
use crate::error::{QaError, QaResult};

/// PostgreSQL foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgQaRepository {
    pool: PgPool,
}

impl PgQaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for PgQaRepository {
    async fn create_question(&self, question: &Question) -> QaResult<()> {
        sqlx::query(
            r#"
            INSERT INTO questions (id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(question.id.as_uuid())
        .bind(question.title.as_str())
        .bind(question.content.as_str())
        .bind(question.created_at)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_questions(&self) -> QaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM questions
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn question_exists(&self, question_id: &QuestionId) -> QaResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)")
                .bind(question_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

impl AnswerRepository for PgQaRepository {
    async fn create_answer(&self, answer: &Answer) -> QaResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO answers (id, question_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(answer.id.as_uuid())
        .bind(answer.question_id.as_uuid())
        .bind(answer.content.as_str())
        .bind(answer.created_at)
        .bind(answer.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                Err(QaError::QuestionNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_answers(&self, question_id: &QuestionId) -> QaResult<Vec<Answer>> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            r#"
            SELECT id, question_id, content, created_at, updated_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(question_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AnswerRow::into_answer).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: QuestionId::from_uuid(self.id),
            title: QuestionTitle::from_db(self.title),
            content: PostContent::from_db(self.content),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    id: Uuid,
    question_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AnswerRow {
    fn into_answer(self) -> Answer {
        Answer {
            id: AnswerId::from_uuid(self.id),
            question_id: QuestionId::from_uuid(self.question_id),
            content: PostContent::from_db(self.content),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

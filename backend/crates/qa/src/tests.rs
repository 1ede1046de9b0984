//! Unit tests for Q&A crate

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_objects::*;
    use crate::error::QaError;

    #[test]
    fn test_title_bounds() {
        assert!(QuestionTitle::new("a").is_ok());
        assert!(QuestionTitle::new("a".repeat(TITLE_MAX_CHARS)).is_ok());

        assert!(matches!(
            QuestionTitle::new(""),
            Err(QaError::InvalidInput(_))
        ));
        assert!(QuestionTitle::new("a".repeat(TITLE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        // 255 three-byte characters
        let title = "質".repeat(TITLE_MAX_CHARS);
        assert!(title.len() > TITLE_MAX_CHARS);
        assert!(QuestionTitle::new(title).is_ok());
    }

    #[test]
    fn test_content_bounds() {
        assert!(PostContent::new("x".repeat(CONTENT_MAX_CHARS)).is_ok());
        assert!(PostContent::new("x".repeat(CONTENT_MAX_CHARS + 1)).is_err());
        assert!(PostContent::new("").is_err());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = PostContent::new("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "content must be between 1 and 5000 characters"
        );
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::QaError;
    use axum::http::StatusCode;
    use kernel::error::app_error::AppError;

    #[test]
    fn test_status_codes() {
        assert_eq!(QaError::QuestionNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            QaError::CreateQuestionFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            QaError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_status_matches_response() {
        for err in [
            QaError::QuestionNotFound,
            QaError::CreateQuestionFailed,
            QaError::FetchQuestionsFailed,
            QaError::CreateAnswerFailed,
            QaError::FetchAnswersFailed,
            QaError::InvalidInput("x".into()),
            QaError::Internal("x".into()),
        ] {
            let status = err.status_code();
            let app: AppError = err.into();
            assert_eq!(status.as_u16(), app.status_code());
        }
    }

    #[test]
    fn test_client_messages() {
        let err: AppError = QaError::FetchQuestionsFailed.into();
        assert_eq!(err.message(), "Failed to fetch questions");

        let err: AppError = QaError::Internal("connection reset".into()).into();
        assert_eq!(err.message(), "Internal Server Error");
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::*;
    use crate::domain::entities::{Answer, Question};
    use crate::domain::repository::{AnswerRepository, QuestionRepository};
    use crate::error::{QaError, QaResult};
    use crate::infra::memory::InMemoryQaRepository;
    use kernel::id::{QuestionId, UserId};
    use kernel::identity::AuthenticatedUser;
    use std::sync::Arc;

    /// Repository whose every call fails like a broken connection
    #[derive(Clone)]
    struct FailingRepository;

    impl QuestionRepository for FailingRepository {
        async fn create_question(&self, _question: &Question) -> QaResult<()> {
            Err(QaError::Internal("connection refused".into()))
        }

        async fn list_questions(&self) -> QaResult<Vec<Question>> {
            Err(QaError::Internal("connection refused".into()))
        }

        async fn question_exists(&self, _question_id: &QuestionId) -> QaResult<bool> {
            Err(QaError::Internal("connection refused".into()))
        }
    }

    impl AnswerRepository for FailingRepository {
        async fn create_answer(&self, _answer: &Answer) -> QaResult<()> {
            Err(QaError::Internal("connection refused".into()))
        }

        async fn list_answers(&self, _question_id: &QuestionId) -> QaResult<Vec<Answer>> {
            Err(QaError::Internal("connection refused".into()))
        }
    }

    fn author() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: UserId::new(),
            name: "Heidi".to_string(),
            display_id: "heidi".to_string(),
        }
    }

    async fn ask(repo: &Arc<InMemoryQaRepository>, title: &str) -> Question {
        CreateQuestionUseCase::new(repo.clone())
            .execute(
                CreateQuestionInput {
                    title: title.to_string(),
                    content: "body".to_string(),
                },
                &author(),
            )
            .await
            .unwrap()
    }

    fn answer_input(question_id: impl ToString, content: &str) -> CreateAnswerInput {
        CreateAnswerInput {
            question_id: question_id.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_questions() {
        let repo = Arc::new(InMemoryQaRepository::new());
        let first = ask(&repo, "First?").await;
        let second = ask(&repo, "Second?").await;

        assert_eq!(first.created_at, first.updated_at);

        let listed = ListQuestionsUseCase::new(repo.clone()).execute().await.unwrap();
        let ids: Vec<QuestionId> = listed.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);

        // Reads do not change state
        let again = ListQuestionsUseCase::new(repo.clone()).execute().await.unwrap();
        assert_eq!(again.len(), 2);
    }

    #[tokio::test]
    async fn test_create_question_rejects_out_of_bounds_title() {
        let repo = Arc::new(InMemoryQaRepository::new());
        let err = CreateQuestionUseCase::new(repo)
            .execute(
                CreateQuestionInput {
                    title: String::new(),
                    content: "body".to_string(),
                },
                &author(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_answers_belong_to_their_question() {
        let repo = Arc::new(InMemoryQaRepository::new());
        let q1 = ask(&repo, "One").await;
        let q2 = ask(&repo, "Two").await;
        let use_case = CreateAnswerUseCase::new(repo.clone(), repo.clone());

        let a1 = use_case.execute(answer_input(q1.id, "first"), &author()).await.unwrap();
        use_case.execute(answer_input(q2.id, "other"), &author()).await.unwrap();
        let a2 = use_case.execute(answer_input(q1.id, "second"), &author()).await.unwrap();

        assert_eq!(a1.question_id, q1.id);

        let listed = ListAnswersUseCase::new(repo.clone(), repo.clone())
            .execute(&q1.id.to_string())
            .await
            .unwrap();
        let contents: Vec<&str> = listed.iter().map(|a| a.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert_eq!(listed[1].id, a2.id);
    }

    #[tokio::test]
    async fn test_answer_to_unknown_or_malformed_question() {
        let repo = Arc::new(InMemoryQaRepository::new());
        let use_case = CreateAnswerUseCase::new(repo.clone(), repo.clone());

        let unknown = use_case
            .execute(answer_input(QuestionId::new(), "hello"), &author())
            .await;
        assert!(matches!(unknown, Err(QaError::QuestionNotFound)));

        let malformed = use_case
            .execute(answer_input("42", "hello"), &author())
            .await;
        assert!(matches!(malformed, Err(QaError::QuestionNotFound)));

        let listed = ListAnswersUseCase::new(repo.clone(), repo.clone())
            .execute("not-a-uuid")
            .await;
        assert!(matches!(listed, Err(QaError::QuestionNotFound)));
    }

    #[tokio::test]
    async fn test_store_failures_map_to_operation_errors() {
        let repo = Arc::new(FailingRepository);

        let err = CreateQuestionUseCase::new(repo.clone())
            .execute(
                CreateQuestionInput {
                    title: "t".to_string(),
                    content: "c".to_string(),
                },
                &author(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::CreateQuestionFailed));

        let err = ListQuestionsUseCase::new(repo.clone()).execute().await.unwrap_err();
        assert!(matches!(err, QaError::FetchQuestionsFailed));

        let err = CreateAnswerUseCase::new(repo.clone(), repo.clone())
            .execute(answer_input(QuestionId::new(), "c"), &author())
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::CreateAnswerFailed));

        let err = ListAnswersUseCase::new(repo.clone(), repo.clone())
            .execute(&QuestionId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::FetchAnswersFailed));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::infra::memory::InMemoryQaRepository;
    use crate::presentation::router::qa_router_generic;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::http::StatusCode;
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::Router;
    use http_body_util::BodyExt;
    use kernel::id::UserId;
    use kernel::identity::AuthenticatedUser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn as_test_user(mut req: Request, next: Next) -> Response {
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: UserId::new(),
            name: "Ivan".to_string(),
            display_id: "ivan".to_string(),
        });
        next.run(req).await
    }

    fn app() -> Router {
        qa_router_generic(InMemoryQaRepository::new()).layer(middleware::from_fn(as_test_user))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let body = match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_post_question_returns_created_array() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/questions",
            Some(json!({ "title": "Why Rust?", "content": "Tell me." })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], "Why Rust?");
        assert!(rows[0]["createdAt"].is_string());
        assert!(rows[0]["updatedAt"].is_string());

        let (status, listed) = send(&app, "GET", "/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], rows[0]["id"]);
    }

    #[tokio::test]
    async fn test_post_question_validation() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/questions",
            Some(json!({ "title": "", "content": "x".repeat(5001) })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"].as_array().unwrap().len(), 2);

        let (status, body) = send(&app, "POST", "/questions", Some(json!({ "title": "t" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");

        let (_, listed) = send(&app, "GET", "/questions", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_answers_flow() {
        let app = app();
        let (_, created) = send(
            &app,
            "POST",
            "/questions",
            Some(json!({ "title": "Q", "content": "C" })),
        )
        .await;
        let question_id = created[0]["id"].as_str().unwrap().to_string();
        let uri = format!("/questions/{}/answers", question_id);

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "content": "A" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body[0]["questionId"], question_id.as_str());

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_answer_unknown_question() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/questions/00000000-0000-4000-8000-000000000000/answers",
            Some(json!({ "content": "A" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Question not found");

        let (status, _) = send(&app, "GET", "/questions/nope/answers", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_without_identity_is_unauthorized() {
        let app = qa_router_generic(InMemoryQaRepository::new());
        let (status, body) = send(&app, "GET", "/questions", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }
}

//! HTTP Client

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::models::{
    Answer, AnswerParams, ErrorBody, LoginParams, LoginResponse, Question, QuestionParams,
    RegisterParams, User,
};

/// Client for one server, holding the bearer token after `login`
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// `base_url` may carry a path prefix, e.g. `http://host/api`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Forget the stored token
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// Base URL extended by path segments, each percent-encoded
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// JSON POST to the path made of `segments`, with the bearer token when
    /// one is stored
    pub async fn post<B, R>(&self, segments: &[&str], body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.authorize(self.http.post(self.url(segments)?).json(body));
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn get<R>(&self, segments: &[&str]) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        let request = self.authorize(self.http.get(self.url(segments)?));
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn decode<R>(response: Response) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        tracing::debug!(%status, %message, "Request rejected");
        Err(ClientError::Api { status, message })
    }

    /// POST /users
    pub async fn register(&self, params: &RegisterParams) -> ClientResult<User> {
        let rows: Vec<User> = self.post(&["users"], params).await?;
        rows.into_iter().next().ok_or(ClientError::EmptyResponse)
    }

    /// POST /login; the returned token is kept for later calls
    pub async fn login(&mut self, params: &LoginParams) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.post(&["login"], params).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// POST /questions
    pub async fn post_question(&self, params: &QuestionParams) -> ClientResult<Question> {
        let rows: Vec<Question> = self.post(&["questions"], params).await?;
        rows.into_iter().next().ok_or(ClientError::EmptyResponse)
    }

    /// POST /questions/{questionId}/answers
    pub async fn post_answer(
        &self,
        question_id: &str,
        params: &AnswerParams,
    ) -> ClientResult<Answer> {
        let rows: Vec<Answer> = self
            .post(&["questions", question_id, "answers"], params)
            .await?;
        rows.into_iter().next().ok_or(ClientError::EmptyResponse)
    }

    /// GET /questions
    pub async fn list_questions(&self) -> ClientResult<Vec<Question>> {
        self.get(&["questions"]).await
    }

    /// GET /questions/{questionId}/answers
    pub async fn list_answers(&self, question_id: &str) -> ClientResult<Vec<Answer>> {
        self.get(&["questions", question_id, "answers"]).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

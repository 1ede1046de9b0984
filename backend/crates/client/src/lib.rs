//! Q&A API Client
//!
//! Typed HTTP client for the Q&A server:
//! - `ApiClient::post` - generic JSON POST carrying the bearer token
//! - `ApiClient::register` / `ApiClient::login` - account endpoints
//! - `ApiClient::post_question` / `ApiClient::post_answer` - authenticated writes
//! - `ApiClient::list_questions` / `ApiClient::list_answers` - authenticated reads

pub mod api_client;
pub mod error;
pub mod models;

pub use api_client::ApiClient;
pub use error::{ClientError, ClientResult};

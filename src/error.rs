// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAI API key not configured in AI service.")]
    MissingCredential,

    #[error("AI plagiarism service error: {0}")]
    Upstream(String),

    #[error("AI plagiarism service timed out: {0}")]
    UpstreamTimeout(String),
}

impl ServiceError {
    /// Classifies a reqwest failure, keeping timeouts distinct from other
    /// transport errors.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::UpstreamTimeout(err.to_string())
        } else {
            ServiceError::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        let body = Json(json!({ "detail": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

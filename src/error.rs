use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::freight::QuoteError;

/// Application error types surfaced over HTTP
#[derive(Debug, Error)]
pub enum AppError {
    /// Calculator rejected the quote
    #[error(transparent)]
    Quote(#[from] QuoteError),
    /// Request body could not be read as a quote request
    #[error("invalid request body: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// Error type name reported in the response body
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Quote(err) => err.type_name(),
            Self::InvalidRequest(_) => "InvalidInput",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.type_name(),
            "message": self.to_string(),
        }));

        // Every variant is a caller mistake
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

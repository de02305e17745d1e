//! Error types for the policy server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Server error types
///
/// Validation findings are never errors; they travel inside a
/// `ValidationResult`. These cover requests the server refuses to process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_REQUEST",
                msg.clone(),
            ),
            ServerError::MalformedBody(msg) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_BODY", msg.clone())
            }
            ServerError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            ServerError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ServerError::InvalidRequest(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => {
                ServerError::UnsupportedMediaType(err.body_text())
            }
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ServerError::PayloadTooLarge(other.body_text())
            }
            other => ServerError::MalformedBody(other.body_text()),
        }
    }
}

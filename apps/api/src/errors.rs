use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "...", "details"?: ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Server is missing required configuration: {0} is not set")]
    ConfigurationMissing(&'static str),

    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<Value>,
    },

    #[error("Failed to call the Gemini API. Status: {status}. Message: {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid or blocked response from Gemini (likely a safety filter)")]
    InvalidOrBlockedResponse { details: Value },

    #[error("Server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            // Provider statuses outside the valid range collapse to 502.
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ConfigurationMissing(_)
            | AppError::InvalidOrBlockedResponse { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::Blocked { details } => AppError::InvalidOrBlockedResponse { details },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::MethodNotAllowed | AppError::BadRequest { .. } => {
                tracing::warn!("Rejected request: {self}");
            }
            AppError::ConfigurationMissing(key) => {
                tracing::error!("Configuration missing: {key}");
            }
            AppError::Upstream { status, message } => {
                tracing::error!("Gemini API error (status {status}): {message}");
            }
            AppError::InvalidOrBlockedResponse { details } => {
                tracing::error!("Invalid Gemini response: {details}");
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
            }
        }

        let message = self.to_string();
        let body = match self {
            AppError::BadRequest {
                details: Some(details),
                ..
            }
            | AppError::InvalidOrBlockedResponse { details } => {
                json!({ "error": message, "details": details })
            }
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

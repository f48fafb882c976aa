//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::reactive::HandlerError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct AppError(pub HandlerError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let msg = self.0.to_string();
        let (status, error) = match self.0 {
            HandlerError::UnknownOutput(id) => (
                StatusCode::NOT_FOUND,
                ApiError::new("UNKNOWN_OUTPUT", msg).with_details(id),
            ),
            HandlerError::UnknownInput(id) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("UNKNOWN_INPUT", msg).with_details(id),
            ),
            HandlerError::InvalidInput { input, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_INPUT", msg).with_details(input),
            ),
            HandlerError::InvalidTransition { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<HandlerError> for AppError {
    fn from(err: HandlerError) -> Self {
        AppError(err)
    }
}

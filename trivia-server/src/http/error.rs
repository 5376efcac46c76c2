//! API error type with IntoResponse
//!
//! Every error becomes `{success: false, error: <status>, message}`. Details
//! are logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::{StoreError, ValidationError};

#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body (400)
    BadRequest { reason: String },

    /// Missing resource or empty required result (404)
    NotFound,

    /// Known path, unsupported method (405)
    MethodNotAllowed,

    /// Store failure or unusable input (422)
    Unprocessable { reason: String },

    /// Uncaught fault (500)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::warn!(%reason, "bad request"),
            Self::NotFound | Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::error!(%reason, "unprocessable request"),
            Self::Internal { message } => tracing::error!(%message, "internal error"),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
            other => Self::Unprocessable {
                reason: other.to_string(),
            },
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

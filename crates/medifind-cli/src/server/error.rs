//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use medifind::{FieldErrors, MedifindError};

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not a JSON object.
    MalformedPayload,
    /// One or more payload fields are invalid.
    Validation(FieldErrors),
    /// The service could not complete the request.
    Internal {
        /// Summary shown to the client, e.g. "Failed to fetch doctors".
        message: String,
        /// Underlying cause.
        detail: String,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl ApiError {
    /// Map a library error, using `message` as the summary for service
    /// failures.
    pub fn with_context(message: &str, err: MedifindError) -> Self {
        match err {
            MedifindError::MalformedPayload(_) => ApiError::MalformedPayload,
            MedifindError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal {
                message: message.to_string(),
                detail: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::MalformedPayload => ErrorResponse {
                message: "Invalid JSON payload".to_string(),
                error: None,
                errors: None,
            },
            ApiError::Validation(errors) => ErrorResponse {
                message: "Invalid doctor data".to_string(),
                error: None,
                errors: Some(errors),
            },
            ApiError::Internal { message, detail } => {
                error!(%detail, "{}", message);
                ErrorResponse {
                    message,
                    error: Some(detail),
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<MedifindError> for ApiError {
    fn from(err: MedifindError) -> Self {
        ApiError::with_context("Request failed", err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MalformedPayload => write!(f, "Malformed payload"),
            ApiError::Validation(errors) => write!(f, "Invalid doctor data: {}", errors),
            ApiError::Internal { message, detail } => write!(f, "{}: {}", message, detail),
        }
    }
}

impl std::error::Error for ApiError {}

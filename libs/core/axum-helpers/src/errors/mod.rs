pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message sent to clients for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Standard error response envelope.
///
/// Every error leaves the service in this shape:
///
/// ```json
/// {
///   "error": {
///     "type": "VALIDATION_ERROR",
///     "message": "email format is invalid",
///     "field": "email"
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error kind
    #[serde(rename = "type")]
    pub kind: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Offending input field, for validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Handlers never inspect the content of an error beyond its kind: the
/// variant picks the status code and the envelope carries the message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {message} (field: {field})")]
    Validation { field: String, message: String },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Request Timeout")]
    RequestTimeout,

    #[error("Internal Server Error: {message}")]
    Internal {
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Internal {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFoundError,
            AppError::Conflict(_) => ErrorCode::ConflictError,
            AppError::BadRequest(_) => ErrorCode::BadRequestError,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowedError,
            AppError::RequestTimeout => ErrorCode::RequestTimeoutError,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

/// Untyped failures surface as internal errors; the report is kept as the cause.
impl From<eyre::Report> for AppError {
    fn from(report: eyre::Report) -> Self {
        AppError::Internal {
            message: report.to_string(),
            cause: Some(report.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let (message, field) = match self {
            AppError::Validation { field, message } => {
                tracing::info!(error_code = code.code(), field = %field, "Validation error: {}", message);
                (message, Some(field))
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), "Conflict: {}", msg);
                (msg, None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (msg, None)
            }
            AppError::MethodNotAllowed => ("method not allowed".to_string(), None),
            AppError::RequestTimeout => {
                tracing::warn!(error_code = code.code(), "Request timed out");
                ("request timed out".to_string(), None)
            }
            AppError::Internal { message, cause } => {
                tracing::error!(
                    error_code = code.code(),
                    cause = ?cause,
                    "Internal server error: {}",
                    message
                );
                (INTERNAL_ERROR_MESSAGE.to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                kind: code,
                message,
                field,
            },
        });

        (code.status(), body).into_response()
    }
}

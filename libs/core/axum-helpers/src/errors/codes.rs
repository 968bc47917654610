//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - the string clients see in `error.type` (e.g., "VALIDATION_ERROR")
//! - an integer code attached to log events
//! - the HTTP status it maps to
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ConflictError;
//! assert_eq!(code.as_str(), "CONFLICT_ERROR");
//! assert_eq!(code.code(), 1003);
//! assert_eq!(code.status().as_u16(), 409);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed a content rule; scoped to one field
    ValidationError,

    /// No entity at the given id, or no route for the path
    NotFoundError,

    /// Uniqueness violation
    ConflictError,

    /// Request body could not be decoded into the expected shape
    BadRequestError,

    /// Known path, unsupported HTTP method
    MethodNotAllowedError,

    /// Request not handled within the configured timeout
    RequestTimeoutError,

    /// Unexpected failure; details stay in the server log
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFoundError => "NOT_FOUND_ERROR",
            Self::ConflictError => "CONFLICT_ERROR",
            Self::BadRequestError => "BAD_REQUEST_ERROR",
            Self::MethodNotAllowedError => "METHOD_NOT_ALLOWED_ERROR",
            Self::RequestTimeoutError => "REQUEST_TIMEOUT_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFoundError => 1002,
            Self::ConflictError => 1003,
            Self::BadRequestError => 1004,
            Self::MethodNotAllowedError => 1005,
            Self::RequestTimeoutError => 1006,
            Self::InternalError => 5001,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::BadRequestError => StatusCode::BAD_REQUEST,
            Self::NotFoundError => StatusCode::NOT_FOUND,
            Self::ConflictError => StatusCode::CONFLICT,
            Self::MethodNotAllowedError => StatusCode::METHOD_NOT_ALLOWED,
            Self::RequestTimeoutError => StatusCode::REQUEST_TIMEOUT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFoundError.as_str(), "NOT_FOUND_ERROR");
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotFoundError.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ConflictError.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::BadRequestError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::MethodNotAllowedError.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ErrorCode::RequestTimeoutError.status(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(
            ErrorCode::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_serde_matches_as_str() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::NotFoundError,
            ErrorCode::ConflictError,
            ErrorCode::BadRequestError,
            ErrorCode::MethodNotAllowedError,
            ErrorCode::RequestTimeoutError,
            ErrorCode::InternalError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            let back: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
        }
    }
}

//! JSON body extractor that reports decode failures with the standard error envelope.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Message returned for any body that does not decode into the expected shape.
pub const INVALID_JSON_BODY: &str = "invalid JSON body";

/// JSON extractor with uniform rejection.
///
/// Unlike `axum::Json`, the `Content-Type` header is not inspected and every
/// decode failure (syntax, wrong types, unknown fields on types with
/// `deny_unknown_fields`) is rejected as a 400 `BAD_REQUEST_ERROR`, before the
/// handler runs.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to buffer request body");
            AppError::BadRequest(INVALID_JSON_BODY.to_string())
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::BadRequest(INVALID_JSON_BODY.to_string())
        })?;

        Ok(JsonBody(value))
    }
}

use axum::BoxError;
use axum::response::{IntoResponse, Response};
use tower::timeout::error::Elapsed;

use super::AppError;

/// Handler for 404 Not Found errors.
///
/// Use as the router fallback so unknown paths still answer with the
/// JSON error envelope.
pub async fn not_found() -> Response {
    AppError::NotFound("endpoint not found".to_string()).into_response()
}

/// Handler for 405 Method Not Allowed errors.
///
/// Attach with `MethodRouter::fallback` on every known path.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}

/// Error handler for fallible middleware (the request timeout).
///
/// Install with `HandleErrorLayer` so middleware failures still answer
/// with the JSON error envelope.
pub async fn middleware_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        AppError::RequestTimeout.into_response()
    } else {
        AppError::internal("middleware failure", err).into_response()
    }
}

use std::any::Any;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Routes advertised by the 404 payload.
pub const AVAILABLE_ROUTES: [&str; 3] = ["/", "/chat", "/health"];

/// Application-level error type for HTTP handlers.
///
/// Model failures never get here: they are absorbed by the relay and shown
/// as canned messages. What remains are faults the relay does not
/// anticipate, and all of them render as the same generic 500 payload.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be parsed.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A view failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled request error");
        server_error()
    }
}

/// The generic 500 payload.
pub fn server_error() -> Response {
    let body = json!({
        "error": "Something went wrong!",
        "message": "Please try again later.",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    let body = json!({
        "error": "Page not found!",
        "message": "Try visiting / for the main page or /chat for chat mode",
        "availableRoutes": AVAILABLE_ROUTES,
    });
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}

/// Panic hook for `CatchPanicLayer`: log the payload, answer with the 500 payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");
    server_error()
}

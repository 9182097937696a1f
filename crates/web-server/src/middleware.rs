use crate::error::InternalCause;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Instant;

/// Client-visible message for untyped failures when verbose errors are off.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Emits exactly one log line per request: method, path, final status and
/// elapsed time. Observes only; the response passes through untouched.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}

/// The single place an opaque failure becomes a client-visible response.
///
/// Typed HTTP errors have already rendered themselves and pass through
/// verbatim. Opaque failures arrive as a bare 500 carrying an
/// [`InternalCause`] extension; this middleware logs the cause and writes the
/// JSON envelope, with the raw text only in verbose-error mode.
pub async fn translate_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(InternalCause(cause)) = response.extensions_mut().remove::<InternalCause>() else {
        return response;
    };

    tracing::error!(error = %cause, "unhandled error");

    let message = if state.settings.verbose_errors() {
        cause
    } else {
        GENERIC_ERROR_MESSAGE.to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error", "message": message })),
    )
        .into_response()
}

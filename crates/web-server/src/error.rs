use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Attached to a 500 response whose body still has to be written by the
/// error-translation middleware. Carries the rendered cause text; how much of
/// it the client sees is decided there, not here.
#[derive(Clone)]
pub struct InternalCause(pub String);

/// The application's error type, split along the only distinction the
/// pipeline cares about: does the error already carry an intended status code
/// and payload, or not.
#[derive(Error, Debug)]
pub enum AppError {
    /// A typed HTTP error. Status and detail reach the client verbatim.
    #[error("http {status}: {detail}")]
    Http { status: StatusCode, detail: Value },
    /// A storage failure. Opaque to the client; becomes a generic 500.
    #[error(transparent)]
    Database(#[from] database::DbError),
    /// Any other unexpected failure. Opaque to the client; becomes a generic 500.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    pub fn http(status: StatusCode, detail: impl Into<Value>) -> Self {
        Self::Http {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<Value>) -> Self {
        Self::http(StatusCode::NOT_FOUND, detail)
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Http { status, detail } => {
                let body = Json(json!({
                    "error": status.canonical_reason().unwrap_or("Error"),
                    "message": detail,
                }));
                (status, body).into_response()
            }
            AppError::Database(err) => internal(err.to_string()),
            AppError::Unexpected(err) => internal(err.to_string()),
        }
    }
}

fn internal(cause: String) -> Response {
    let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
    response.extensions_mut().insert(InternalCause(cause));
    response
}

use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use database::{with_session, SqliteConnection};
use serde_json::{json, Value};

/// # GET /
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}", state.settings.app_name),
        "version": state.settings.app_version,
        "health": "/health",
    }))
}

/// # GET /health
/// Reports liveness. Probes storage through a session so a broken pool shows
/// up here instead of on the first real query.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    with_session(&state.pool, |conn: &mut SqliteConnection| {
        Box::pin(async move { database::ping(conn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": state.settings.app_name,
    })))
}

/// # GET /api/hello
pub async fn hello() -> Json<Value> {
    Json(json!({
        "message": "Hello from Keel!",
        "framework": "axum",
        "language": "Rust",
    }))
}

/// # GET /api/hello/:name
pub async fn hello_name(Path(name): Path<String>) -> Json<Value> {
    Json(json!({
        "message": format!("Hello, {name}!"),
        "framework": "axum",
    }))
}

/// # GET /api/error/400
pub async fn bad_request_error() -> Result<Json<Value>, AppError> {
    Err(AppError::http(
        StatusCode::BAD_REQUEST,
        "This is a bad request error example",
    ))
}

/// # GET /api/error/404
pub async fn not_found_error() -> Result<Json<Value>, AppError> {
    Err(AppError::not_found("Resource not found example"))
}

/// # GET /api/error/500
/// Fails with an untyped error on purpose, exercising the translation
/// middleware's generic-500 path.
pub async fn internal_server_error() -> Result<Json<Value>, AppError> {
    Err(anyhow::anyhow!("This is an internal server error example").into())
}

/// # GET /api/error/custom
/// A typed error with a structured detail payload instead of a plain string.
pub async fn custom_error() -> Result<Json<Value>, AppError> {
    Err(AppError::http(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "error": "CustomValidationError",
            "message": "Custom validation failed",
            "field": "example_field",
        }),
    ))
}

/// Fallback for requests no route matches.
pub async fn route_not_found() -> AppError {
    AppError::not_found("The requested route does not exist")
}

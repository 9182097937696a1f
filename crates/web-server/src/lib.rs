use axum::{http::HeaderValue, middleware as axum_middleware, routing::get, Router};
use configuration::Settings;
use database::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub mod error;
pub mod handlers;
pub mod middleware;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub pool: SqlitePool,
}

/// Assembles the route table and the middleware chain around it.
///
/// Chain order, outermost first: CORS, request logging, error translation,
/// then router dispatch. Logging sits outside translation so the one log line
/// per request carries the status the client actually receives.
pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .settings
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "skipping malformed CORS origin");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/hello", get(handlers::hello))
        .route("/api/hello/:name", get(handlers::hello_name))
        .route("/api/error/400", get(handlers::bad_request_error))
        .route("/api/error/404", get(handlers::not_found_error))
        .route("/api/error/500", get(handlers::internal_server_error))
        .route("/api/error/custom", get(handlers::custom_error))
        .fallback(handlers::route_not_found)
        .with_state(state.clone())
        .layer(axum_middleware::from_fn_with_state(state, middleware::translate_errors))
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(cors)
}

/// The main function to configure and run the web server.
///
/// Returns after a graceful shutdown; the caller still owns the pool and is
/// responsible for closing it.
pub async fn run_server(settings: Arc<Settings>, pool: SqlitePool) -> anyhow::Result<()> {
    let addr = settings.bind_addr()?;
    let app = build_router(AppState {
        settings: settings.clone(),
        pool,
    });

    tracing::info!("{} listening on http://{}", settings.app_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

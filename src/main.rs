use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Keel web service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, when present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Arc::new(configuration::load_settings()?);
    tracing::info!(app = %settings.app_name, environment = ?settings.environment, "starting application");

    // Startup preconditions: storage must be reachable and the schema current
    // before the listener opens. A failure here exits non-zero.
    let pool = database::connect(&settings.database_url).await?;
    database::ensure_schema(&pool).await?;
    tracing::info!("database initialized");

    web_server::run_server(settings, pool.clone()).await?;

    // run_server only returns after a graceful shutdown.
    database::close(&pool).await;
    tracing::info!("shutdown complete");

    Ok(())
}

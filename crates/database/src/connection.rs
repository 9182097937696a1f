use crate::error::DbError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Establishes a connection pool to the SQLite database.
///
/// Called exactly once at startup. A failure here is a startup precondition
/// violation: the caller reports it and exits instead of serving traffic.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Applies any pending embedded migrations.
///
/// Safe to run on every startup; migrations that already ran are skipped, so a
/// second call is a no-op.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Drains the pool during shutdown. Best-effort; the process is already
/// terminating when this runs.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    tracing::info!("database connection pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let url = format!("sqlite://{}", dir.path().join("schema.db").display());
        let pool = connect(&url).await.expect("connect");

        ensure_schema(&pool).await.expect("first run creates the schema");
        ensure_schema(&pool).await.expect("second run must be a no-op");
    }

    #[tokio::test]
    async fn connect_creates_a_missing_database_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("fresh.db");
        let url = format!("sqlite://{}", path.display());

        let _pool = connect(&url).await.expect("connect");
        assert!(path.exists());
    }
}

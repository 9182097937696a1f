use crate::error::DbError;
use futures::future::BoxFuture;
use sqlx::{SqliteConnection, SqlitePool};

/// Runs `op` inside its own transaction with commit/rollback/release discipline.
///
/// Each call checks one connection out of the pool and begins a transaction on
/// it; the handle is owned by this call alone and never outlives it. The
/// contract:
///
/// - `op` returns `Ok` → commit, then release. A commit failure surfaces as
///   `DbError` through `E`.
/// - `op` returns `Err` → rollback, then release, then the original error is
///   returned unchanged. A rollback failure is logged, not substituted.
/// - Release happens on every exit path: `sqlx::Transaction` rolls back and
///   returns its connection to the pool when dropped, so a panicked or
///   cancelled caller cannot leak the handle.
pub async fn with_session<T, E>(
    pool: &SqlitePool,
    op: impl for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, E>>,
) -> Result<T, E>
where
    E: From<DbError>,
{
    let mut tx = pool.begin().await.map_err(|e| E::from(DbError::from(e)))?;

    match op(&mut *tx).await {
        Ok(value) => {
            tx.commit().await.map_err(|e| E::from(DbError::from(e)))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback failed, returning the original error");
            }
            Err(err)
        }
    }
}

/// A trivial liveness probe, used by the health endpoint to verify that a
/// session can reach storage.
pub async fn ping(conn: &mut SqliteConnection) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(conn).await?;
    Ok(())
}

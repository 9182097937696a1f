//! # Keel Database Crate
//!
//! Owns the storage side of the template: the connection pool's lifecycle and
//! the per-request session discipline.
//!
//! ## Architectural Principles
//!
//! - **Adapter boundary:** all sqlx-specific logic lives here. The web layer
//!   sees `connect`/`ensure_schema`/`close` for the process lifetime and
//!   `with_session` for per-request work, nothing lower.
//! - **One handle per request:** `with_session` checks out its own connection
//!   and transaction per call; handles are never shared across requests and
//!   are released on every exit path, including cancellation.
//! - **Asynchronous & pooled:** all operations are async against a
//!   `SqlitePool` sized for concurrent request handling.
//!
//! ## Public API
//!
//! - `connect`: build the pool at startup; fatal on failure.
//! - `ensure_schema`: apply embedded migrations, idempotently.
//! - `close`: drain the pool during shutdown.
//! - `with_session`: scoped unit-of-work with commit/rollback/release rules.
//! - `DbError`: the error types this crate can return.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod session;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{close, connect, ensure_schema};
pub use error::DbError;
pub use session::{ping, with_session};

// Re-exported so callers can name connection types without depending on sqlx
// directly.
pub use sqlx::{SqliteConnection, SqlitePool};

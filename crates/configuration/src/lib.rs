//! # Keel Configuration Crate
//!
//! Loads the immutable, process-wide [`Settings`] value. Resolution order is
//! built-in defaults, then an optional `config.toml` file, then `APP_*`
//! environment variables. The result is constructed once in `main` and handed
//! to every component that needs it; there is no global settings singleton.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Environment, Settings};

/// Loads the application settings.
///
/// This function is the primary entry point for this crate. Defaults mirror a
/// local development setup, a `config.toml` next to the binary may override
/// them, and `APP_*` environment variables (e.g. `APP_PORT`,
/// `APP_DATABASE_URL`) win over both. `APP_CORS_ORIGINS` accepts a
/// comma-separated list.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = defaults()?
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_origins"),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}

/// The built-in defaults, without the file or environment sources layered on
/// top. Kept separate so the defaults can be inspected in isolation.
fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let builder = config::Config::builder()
        .set_default("app_name", "Keel API")?
        .set_default("app_version", env!("CARGO_PKG_VERSION"))?
        .set_default("environment", "development")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 3030_i64)?
        .set_default(
            "cors_origins",
            vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3003".to_string(),
                "http://localhost:3004".to_string(),
            ],
        )?
        .set_default("database_url", "sqlite://app.db")?;

    Ok(builder)
}

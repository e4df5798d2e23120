//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate:
//! `config/default.toml`, then `config/<env>.toml`, then environment
//! variables prefixed with `MOMO__`. A `.env.<env>` file (and then `.env`)
//! is loaded into the process environment first, so `.env.test` can carry
//! the test database URL.

pub mod app;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "MOMO_ENV";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Name of the active environment (`MOMO_ENV`, default `development`).
    pub fn current_env() -> String {
        std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string())
    }

    /// Load configuration for the given environment.
    ///
    /// A plain `DATABASE_URL` variable, when present, overrides
    /// `database.url`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        load_dotenv(env);

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("MOMO")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn load_dotenv(env: &str) {
    let file = format!(".env.{env}");
    match dotenvy::from_filename(&file) {
        Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => debug!(file = %file, error = %e, "Ignoring unreadable environment file"),
    }
    dotenvy::dotenv().ok();
}

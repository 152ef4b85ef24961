//! Application configuration loaded from environment variables

use core_config::{env_or_default, ConfigError, Environment, FromEnv};
use database::postgres::PostgresConfig;

/// Application-specific configuration
///
/// Composes shared config components from the `core_config` and `database`
/// libraries.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub backend: StoreBackend,
}

/// Storage backend selected at startup via `TRACKER_STORE`
#[derive(Clone, Debug)]
pub enum StoreBackend {
    Memory,
    Postgres(PostgresConfig),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            backend: StoreBackend::from_env()?,
        })
    }
}

impl StoreBackend {
    /// `TRACKER_STORE=memory` or `TRACKER_STORE=postgres` (the default);
    /// the postgres backend additionally requires `DATABASE_URL`
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or_default("TRACKER_STORE", "postgres");
        match backend.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "postgres" => Ok(StoreBackend::Postgres(PostgresConfig::from_env()?)),
            other => Err(ConfigError::ParseError {
                key: "TRACKER_STORE".to_string(),
                details: format!("unknown backend '{}'", other),
            }),
        }
    }
}

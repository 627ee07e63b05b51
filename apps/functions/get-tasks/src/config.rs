use std::time::Duration;

use core_config::{env_or_default, env_required, server::ServerConfig, ConfigError, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration
///
/// Composes the shared config components from `core_config` with the
/// function's own settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Identifier of the database-credential secret (required)
    pub secret_id: String,
    /// Deadline applied to each invocation
    pub invocation_timeout: Duration,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_id = env_required("DB_SECRET_ID")?;

        let timeout_ms: u64 = env_or_default("INVOCATION_TIMEOUT_MS", "10000")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "INVOCATION_TIMEOUT_MS".to_string(),
                details: format!("{}", e),
            })?;

        let server = ServerConfig::from_env()?;
        let environment = Environment::from_env();

        Ok(Self {
            secret_id,
            invocation_timeout: Duration::from_millis(timeout_ms),
            server,
            environment,
        })
    }
}

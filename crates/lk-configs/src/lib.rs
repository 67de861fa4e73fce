//! # lk-configs
//!
//! Runtime settings for the Lodgekeeper binary. Defaults are baked in and
//! any field can be overridden through `LODGEKEEPER_*` environment
//! variables (a `.env` file is honored in development via dotenvy).

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// tracing-subscriber EnvFilter directive, e.g. "info" or
    /// "lodgekeeper=debug,tower_http=info".
    pub log_filter: String,
}

impl Settings {
    /// Loads settings: defaults, then `.env`, then process environment.
    /// `LODGEKEEPER_PORT=9090` overrides `port`, and so on.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("loaded environment from .env");
        }
        let settings = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("log_filter", "info")?
            .add_source(Environment::with_prefix("LODGEKEEPER"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_environment() {
        let settings = Settings::load().expect("settings");
        assert!(!settings.host.is_empty());
        assert!(settings.port > 0);
        assert!(!settings.log_filter.is_empty());
    }
}

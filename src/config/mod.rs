mod basic;
mod cors;

pub use basic::BasicConfig;
pub use cors::CorsConfig;

use crate::error::RollcallError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Cross-origin settings for the browser front-end (see `cors` table in config.toml).
    #[serde(default)]
    pub cors: CorsConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ROLLCALL_";

impl Config {
    /// Builds a Figment that merges defaults, `config.toml` (if present) and
    /// `ROLLCALL_`-prefixed environment variables, in that order.
    ///
    /// Nested keys use `__`, e.g. `ROLLCALL_BASIC__LISTEN_PORT=9000`.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates the merged configuration.
    pub fn load() -> Result<Self, RollcallError> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, RollcallError> {
        let cfg: Self = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), RollcallError> {
        if self.basic.database_url.trim().is_empty() {
            return Err(RollcallError::InvalidConfig(
                "basic.database_url must be set and non-empty".to_string(),
            ));
        }
        self.cors.origin_header()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::from_figment(&Figment::from(Serialized::defaults(Config::default())))
            .unwrap();
        assert_eq!(cfg.basic.listen_port, 8080);
        assert_eq!(cfg.basic.database_url, "sqlite://students.db");
        assert_eq!(cfg.cors.allowed_origin.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn toml_overrides_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(
            r#"
            [basic]
            listen_port = 9000
            database_url = "sqlite::memory:"

            [cors]
            allowed_origin = "https://students.example.com"
            "#,
        ));
        let cfg = Config::from_figment(&figment).unwrap();
        assert_eq!(cfg.basic.listen_port, 9000);
        assert_eq!(cfg.basic.database_url, "sqlite::memory:");
        assert_eq!(cfg.basic.loglevel, "info");
        assert_eq!(
            cfg.cors.origin_header().unwrap(),
            "https://students.example.com"
        );
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("[basic]\ndatabase_url = \"  \""));
        assert!(matches!(
            Config::from_figment(&figment),
            Err(RollcallError::InvalidConfig(_))
        ));
    }
}

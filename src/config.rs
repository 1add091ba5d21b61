// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    seed_path: PathBuf,
    pretty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean flag, got '{other}'"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed_path = lookup("MASTHEAD_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("MASTHEAD_SEED_PATH"))?;

        let pretty = lookup("MASTHEAD_PRETTY")
            .map(|value| parse_flag("MASTHEAD_PRETTY", &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            seed_path,
            pretty,
        })
    }

    pub fn seed_path(&self) -> &std::path::Path {
        &self.seed_path
    }

    pub const fn pretty(&self) -> bool {
        self.pretty
    }
}

//! Server settings read from the environment (after `.env` is loaded).
//!
//! Leptos options (site address, site root) come from `Cargo.toml` through
//! `leptos_config`; this only covers what the axum side needs on top.

use std::{env, path::PathBuf};

use thiserror::Error;
use tracing::Level;

pub const DEFAULT_STATIC_DIR: &str = "target/site";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("LOG_LEVEL must be one of trace, debug, info, warn, error (got {0:?})")]
    InvalidLogLevel(String),
    #[error("CANONICAL_REDIRECT must be true or false (got {0:?})")]
    InvalidFlag(String),
    #[error("STATIC_DIR must not be empty")]
    EmptyStaticDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub static_dir: PathBuf,
    pub log_level: Level,
    /// Redirect `www.` hosts to the bare domain.
    pub canonical_redirect: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_level: default_level(),
            canonical_redirect: true,
        }
    }
}

const fn default_level() -> Level {
    if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup("STATIC_DIR") {
            if dir.trim().is_empty() {
                return Err(ConfigError::EmptyStaticDir);
            }
            config.static_dir = PathBuf::from(dir.trim());
        }

        if let Some(level) = lookup("LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            config.log_level = parse_level(&level)?;
        }

        if let Some(flag) = lookup("CANONICAL_REDIRECT").filter(|v| !v.trim().is_empty()) {
            config.canonical_redirect = parse_flag(&flag)?;
        }

        Ok(config)
    }
}

fn parse_level(value: &str) -> Result<Level, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(value.to_owned())),
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(value.to_owned())),
    }
}

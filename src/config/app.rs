// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::warn;

use crate::consts::{BASE_URL_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::enums::TransportAlphabet;
use crate::error::SealError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_link")]
    pub link: Link,
    #[serde(default)]
    pub codec: Codec,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_secret_path")]
    pub secret_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Codec {
    #[serde(default)]
    pub alphabet: TransportAlphabet,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            link: default_link(),
            codec: Codec::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, SealError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SealError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply `SECRET_LINK_BASE_URL` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            self.link.base_url = base_url;
        }
        self
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read `config_path`, or built-in defaults if it is missing or broken
pub fn load_or_default(config_path: &str) -> Config {
    if !Path::new(config_path).exists() {
        #[cfg(feature = "logging")]
        warn!("{config_path} not found — using built-in defaults");
        return Config::default();
    }

    match Config::load_from_path(config_path) {
        Ok(conf) => conf,
        Err(_err) => {
            #[cfg(feature = "logging")]
            warn!("Invalid config at {config_path}: {_err} — using built-in defaults");
            Config::default()
        }
    }
}

/// Load config once from `SECRET_LINK_CONFIG` (or `secret-link.toml`)
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        load_or_default(&config_path).with_env_overrides()
    })
}

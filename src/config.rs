use std::{fs, path::PathBuf};

use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub list_id: String,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://binteapi.com:4011".to_string(),
            list_id: "2".to_string(),
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub notice_duration_ms: u64,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3000,
            tick_rate_ms: 33,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `SONGDECK_*` variables.
    pub fn load() -> color_eyre::Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                let content = fs::read_to_string(&path)?;
                Self::from_toml(&content)
                    .wrap_err_with(|| format!("Invalid config file {}", path.display()))?
            }
            _ => Config::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> color_eyre::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("SONGDECK_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Some(list_id) = lookup("SONGDECK_LIST_ID") {
            self.api.list_id = list_id;
        }
        if let Some(raw) = lookup("SONGDECK_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(_) => warn!("Ignoring SONGDECK_TIMEOUT_SECS={:?}", raw),
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

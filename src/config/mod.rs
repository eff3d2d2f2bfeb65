//
//  twitter-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings for the `tw` command, stored as TOML in the platform config
//! directory and turned into a [`ClientConfig`] for each run. Credentials are
//! not kept here; they live in the system keyring (see [`crate::auth`]).
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/tw/config.toml`
//! - **macOS**: `~/Library/Application Support/tw/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\tw\config\config.toml`
//!
//! The `TW_CONFIG` environment variable points at a different file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://api.twitter.com/1.1"
//! upload_url = "https://upload.twitter.com/1.1"
//! source = "tw"
//! shortlink_size = 23
//! timeout_secs = 10
//!
//! [client]
//! name = "tw"
//! url = "https://example.com/tw"
//! version = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twitter_rest::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("timeout_secs", "10")?;
//! config.save()?;
//!
//! let client_config = config.to_client_config();
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_SHORTLINK_SIZE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_UPLOAD_URL,
};

/// Environment variable overriding the config file location.
pub const ENV_CONFIG_PATH: &str = "TW_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 9] = [
    "base_url",
    "upload_url",
    "user_agent",
    "source",
    "shortlink_size",
    "timeout_secs",
    "client_name",
    "client_url",
    "client_version",
];

/// Global configuration for `tw`.
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    /// Identification sent as `X-Twitter-Client*` headers.
    #[serde(default)]
    pub client: ClientIdentity,
}

/// Connection settings.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `base_url` | `https://api.twitter.com/1.1` |
/// | `upload_url` | `https://upload.twitter.com/1.1` |
/// | `user_agent` | `None` (library default) |
/// | `source` | `None` |
/// | `shortlink_size` | `19` |
/// | `timeout_secs` | `30` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_upload_url")]
    pub upload_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Sent as the `source` parameter on every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Length every link counts as when checking status length.
    #[serde(default = "default_shortlink_size")]
    pub shortlink_size: usize,

    /// Request timeout; `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_upload_url() -> String {
    DEFAULT_UPLOAD_URL.to_string()
}

fn default_shortlink_size() -> usize {
    DEFAULT_SHORTLINK_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_url: default_upload_url(),
            user_agent: None,
            source: None,
            shortlink_size: default_shortlink_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Client identification headers. Sent only when `name` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Config {
    /// Loads the configuration from [`Config::config_path`].
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to [`Config::config_path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the configuration file.
    ///
    /// `TW_CONFIG` wins over the platform directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CONFIG_PATH).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "tw")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a value by key.
    ///
    /// Returns `None` for unknown keys and unset optional values.
    ///
    /// ```rust
    /// use twitter_rest::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("shortlink_size"), Some("19".to_string()));
    /// assert_eq!(config.get("source"), None);
    /// assert_eq!(config.get("unknown_key"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => Some(self.api.base_url.clone()),
            "upload_url" => Some(self.api.upload_url.clone()),
            "user_agent" => self.api.user_agent.clone(),
            "source" => self.api.source.clone(),
            "shortlink_size" => Some(self.api.shortlink_size.to_string()),
            "timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "client_name" => self.client.name.clone(),
            "client_url" => self.client.url.clone(),
            "client_version" => self.client.version.clone(),
            _ => None,
        }
    }

    /// Sets a value by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys and for numeric keys given a non-number.
    /// Changes persist only after [`Config::save`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let text = || Some(value.to_string());
        match key {
            "base_url" => self.api.base_url = value.trim_end_matches('/').to_string(),
            "upload_url" => self.api.upload_url = value.trim_end_matches('/').to_string(),
            "user_agent" => self.api.user_agent = text(),
            "source" => self.api.source = text(),
            "shortlink_size" => {
                self.api.shortlink_size = value
                    .trim()
                    .parse()
                    .with_context(|| format!("'{key}' must be a number"))?;
            }
            "timeout_secs" => {
                self.api.timeout_secs = value
                    .trim()
                    .parse()
                    .with_context(|| format!("'{key}' must be a number"))?;
            }
            "client_name" => self.client.name = text(),
            "client_url" => self.client.url = text(),
            "client_version" => self.client.version = text(),
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Restores a key to its default value.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let defaults = Config::default();
        match key {
            "base_url" => self.api.base_url = defaults.api.base_url,
            "upload_url" => self.api.upload_url = defaults.api.upload_url,
            "user_agent" => self.api.user_agent = None,
            "source" => self.api.source = None,
            "shortlink_size" => self.api.shortlink_size = defaults.api.shortlink_size,
            "timeout_secs" => self.api.timeout_secs = defaults.api.timeout_secs,
            "client_name" => self.client.name = None,
            "client_url" => self.client.url = None,
            "client_version" => self.client.version = None,
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Builds the library configuration for these settings.
    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            base_url: self.api.base_url.clone(),
            upload_url: self.api.upload_url.clone(),
            shortlink_size: self.api.shortlink_size,
            timeout: (self.api.timeout_secs > 0)
                .then(|| Duration::from_secs(self.api.timeout_secs)),
            ..ClientConfig::default()
        };

        if let Some(user_agent) = &self.api.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(source) = &self.api.source {
            config.set_default_param("source", source);
        }
        if let Some(name) = &self.client.name {
            config.set_header("X-Twitter-Client", name);
            if let Some(url) = &self.client.url {
                config.set_header("X-Twitter-Client-URL", url);
            }
            if let Some(version) = &self.client.version {
                config.set_header("X-Twitter-Client-Version", version);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.shortlink_size, 19);
        assert_eq!(config.get("timeout_secs"), Some("30".to_string()));
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("source", "tw").unwrap();
        config.set("base_url", "http://localhost:8080/1.1/").unwrap();

        assert_eq!(config.get("source"), Some("tw".to_string()));
        assert_eq!(config.get("base_url"), Some("http://localhost:8080/1.1".to_string()));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("nope", "x").is_err());
        assert!(config.set("shortlink_size", "many").is_err());
        assert_eq!(config.api.shortlink_size, 19);
    }

    #[test]
    fn test_unset_restores_defaults() {
        let mut config = Config::default();
        config.set("shortlink_size", "23").unwrap();
        config.set("source", "tw").unwrap();

        config.unset("shortlink_size").unwrap();
        config.unset("source").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.unset("nope").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tw").join("config.toml");

        let mut config = Config::default();
        config.set("shortlink_size", "23").unwrap();
        config.set("client_name", "tw").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nsource = \"tw\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.source.as_deref(), Some("tw"));
        assert_eq!(loaded.api.upload_url, DEFAULT_UPLOAD_URL);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_to_client_config() {
        let mut config = Config::default();
        config.set("source", "tw").unwrap();
        config.set("timeout_secs", "0").unwrap();
        config.set("client_name", "tw").unwrap();
        config.set("client_version", "1.0").unwrap();

        let client = config.to_client_config();
        assert_eq!(client.timeout, None);
        assert!(client
            .default_params
            .contains(&("source".to_string(), "tw".to_string())));
        assert!(client
            .request_headers
            .contains(&("X-Twitter-Client".to_string(), "tw".to_string())));
        assert!(client
            .request_headers
            .contains(&("X-Twitter-Client-Version".to_string(), "1.0".to_string())));
    }
}

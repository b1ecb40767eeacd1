//! Configuration management

use crate::error::{ImportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://your-linkding-instance/api/bookmarks/";
pub const DEFAULT_API_TOKEN: &str = "your-api-token";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_FAILED_OUTPUT: &str = "failed_import.json";
pub const DEFAULT_DELAY_MS: u64 = 200;

/// Settings for the bookmark API and the optional tag suggestion service.
///
/// Layered as: built-in defaults, then an optional TOML file, then
/// environment variables. Command-line flags are applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub api_token: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub delay_ms: u64,
    pub failed_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            delay_ms: DEFAULT_DELAY_MS,
            failed_output: PathBuf::from(DEFAULT_FAILED_OUTPUT),
        }
    }
}

impl Config {
    /// Resolve config from an optional file and the process environment
    pub fn resolve(file: Option<&Path>) -> Result<Self> {
        let config = match file {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Load config from a TOML file; unset keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ImportError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            ImportError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = lookup("LINKDING_API_URL") {
            self.api_url = url;
        }
        if let Some(token) = lookup("LINKDING_API_TOKEN") {
            self.api_token = token;
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.openai_api_key = Some(key);
        }
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            self.openai_base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.openai_model = model;
        }
        self
    }

    /// Pause inserted between consecutive API requests
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Whether the API settings are still the built-in placeholders
    pub fn uses_placeholders(&self) -> bool {
        self.api_url == DEFAULT_API_URL || self.api_token == DEFAULT_API_TOKEN
    }
}

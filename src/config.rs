//! Configuration loading and management for newsbrief.
//!
//! Loads settings from `newsbrief.toml` with environment variable overrides for sensitive data.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::summarizer::DEFAULT_MAX_SENTENCES;

/// File name looked up in the working directory and the user config directory
const CONFIG_FILE: &str = "newsbrief.toml";

/// Environment variable holding the NewsAPI key
const NEWSAPI_KEY_VAR: &str = "NEWSAPI_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing NewsAPI key: set NEWSAPI_KEY or [api] newsapi_key")]
    MissingApiKey,
}

/// News source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// NewsAPI search endpoint
    pub endpoint: String,
    /// ISO-639-1 language code of the articles
    pub language: String,
    /// Number of articles fetched per topic
    pub page_size: u32,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub newsapi_key: Option<String>,
}

/// Summarizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Sentences kept per article
    pub max_sentences: usize,
}

/// Insights report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Number of terms in the word cloud
    pub cloud_terms: usize,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
}

impl Config {
    /// Load configuration from the default location (newsbrief.toml in cwd or home).
    ///
    /// Falls back to the defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::parse_file(&path)?,
            None => Config::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::parse_file(path)?;
        config.apply_env();
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Override API keys from environment variables
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(NEWSAPI_KEY_VAR) {
            if !key.trim().is_empty() {
                self.api.newsapi_key = Some(key);
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("newsbrief").join(CONFIG_FILE);
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Get the NewsAPI key
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api
            .newsapi_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsapi.org/v2/everything".to_string(),
            language: "en".to_string(),
            page_size: 10,
            timeout_secs: 30,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self { cloud_terms: 50 }
    }
}

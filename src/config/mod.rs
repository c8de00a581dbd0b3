//! Configuration management for Space Pulse.
//!
//! Configuration is read from `~/.config/space-pulse/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::http_fetcher::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::api::DEFAULT_BASE_URL;
use crate::state::{HighlightLimits, ListSettings, NEWS_SITES_TTL};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of cached list snapshots and featured articles.
    pub ttl_secs: u64,
    pub news_sites_ttl_secs: u64,
    /// Leading items of a first page kept for offline fallback.
    pub snapshot_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 30 * 60,
            news_sites_ttl_secs: NEWS_SITES_TTL.as_secs(),
            snapshot_size: 20,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn news_sites_ttl(&self) -> Duration {
        Duration::from_secs(self.news_sites_ttl_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub featured_limit: usize,
    pub trending_limit: usize,
    pub launch_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            featured_limit: 5,
            trending_limit: 8,
            launch_limit: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/space-pulse/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("space-pulse").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Invalid("pagination.page_size must be at least 1".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("api.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            page_size: self.pagination.page_size,
            snapshot_size: self.cache.snapshot_size,
            snapshot_ttl: self.cache.ttl(),
        }
    }

    pub fn highlight_limits(&self) -> HighlightLimits {
        HighlightLimits {
            featured: self.pagination.featured_limit,
            trending: self.pagination.trending_limit,
            launches: self.pagination.launch_limit,
            featured_ttl: self.cache.ttl(),
        }
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# Space Pulse Configuration

[api]
# Spaceflight News API root
base_url = "{base_url}"

# Per-request timeout in seconds
timeout_secs = {timeout}

# User-Agent header sent with every request
user_agent = "{user_agent}"

[cache]
# How long cached list snapshots stay usable offline (seconds)
ttl_secs = 1800

# How long the news-source list is cached (seconds)
news_sites_ttl_secs = 86400

# Items of the first page kept for offline fallback
snapshot_size = 20

[pagination]
# Items per page for articles, blogs and reports
page_size = 20

# Home-screen strip sizes
featured_limit = 5
trending_limit = 8
launch_limit = 10
"##,
            base_url = DEFAULT_BASE_URL,
            timeout = DEFAULT_TIMEOUT.as_secs(),
            user_agent = DEFAULT_USER_AGENT,
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

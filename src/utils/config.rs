//! TOML-based configuration for the AgroVision client
//!
//! Settings come from `agrovision.toml` (every field optional), then from the
//! environment (`AGRO_API_BASE_URL`, `AGRO_CACHE_PATH`), then from CLI flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "agrovision.toml";

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://agrovision-ai-z1za.onrender.com";

/// Environment variable overriding the backend origin
pub const BASE_URL_ENV: &str = "AGRO_API_BASE_URL";

/// Environment variable overriding the cache file location
pub const CACHE_PATH_ENV: &str = "AGRO_CACHE_PATH";

/// Root configuration structure loaded from agrovision.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgroConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

// ============= API Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

// ============= Cache Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// JSON file holding the last crop and disease responses
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(".agrovision/cache.json")
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

// ============= Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AgroConfig {
    /// Load configuration from a TOML file and the process environment.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            debug!(path = %path.display(), "Loading configuration");
            Self::from_toml_str(&fs::read_to_string(path)?)?
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration text without touching the environment.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(path) = lookup(CACHE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.cache.path = PathBuf::from(path);
        }
    }

    /// Apply command-line overrides, then re-validate.
    pub fn apply_overrides(
        &mut self,
        base_url: Option<String>,
        cache_path: Option<PathBuf>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        if let Some(path) = cache_path {
            self.cache.path = path;
        }
        self.normalize();
        self.validate()
    }

    /// Trim whitespace and trailing slashes from the base URL.
    pub fn normalize(&mut self) {
        self.api.base_url = self.api.base_url.trim().trim_end_matches('/').to_string();
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "api.base_url must start with http:// or https://, got '{}'",
                    url
                ))
            })?;
        if host.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url has no host".to_string(),
            ));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.cache.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "cache.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

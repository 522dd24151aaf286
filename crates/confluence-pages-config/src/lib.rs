//! Configuration management for the Confluence pages client.
//!
//! Parses `confluence.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `confluence.base_url`
//! - `confluence.username`
//! - `confluence.password`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "confluence.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Confluence connection configuration.
    pub confluence: Option<ConfluenceConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Confluence connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceConfig {
    /// REST API base URL, e.g. `https://wiki.example.com/rest/api`.
    pub base_url: String,
    /// Basic auth username.
    pub username: String,
    /// Basic auth password or personal access token.
    pub password: String,
}

impl ConfluenceConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "confluence.base_url")?;
        require_http_url(&self.base_url, "confluence.base_url")?;
        require_non_empty(&self.username, "confluence.username")?;
        require_non_empty(&self.password, "confluence.password")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`confluence.password`").
        field: String,
        /// Error message (e.g., "${`CONFLUENCE_PASSWORD`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `confluence.toml` in current directory and parents,
    /// falling back to an empty configuration when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a referenced environment variable is unset.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Get validated Confluence configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_confluence(&self) -> Result<&ConfluenceConfig, ConfigError> {
        let conf = self.confluence.as_ref().ok_or_else(|| {
            ConfigError::Validation("[confluence] section required in config".into())
        })?;
        conf.validate()?;
        Ok(conf)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut confluence) = self.confluence {
            confluence.base_url = expand::expand_env(&confluence.base_url, "confluence.base_url")?;
            confluence.username = expand::expand_env(&confluence.username, "confluence.username")?;
            confluence.password = expand::expand_env(&confluence.password, "confluence.password")?;
        }
        Ok(())
    }
}

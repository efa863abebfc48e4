//! Configuration management for Linkcast

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::types::Visibility;

/// Status format applied when none is configured.
pub const DEFAULT_STATUS_FORMAT: &str = "#Linkcast: ${title} ${url} ${tags}";

/// Tag delimiter applied when none is configured.
pub const DEFAULT_TAG_DELIMITER: &str = " ";

const DEFAULT_MAX_LENGTH: i64 = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub mastodon: MastodonConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

/// Instance and token strings, consumed only by the transport collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MastodonConfig {
    /// Instance URL or hostname (e.g. "https://mastodon.social").
    pub instance: String,
    /// OAuth access token for the posting account.
    pub access_token: String,
}

/// Settings driving status composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Template with `${placeholder}` tokens.
    #[serde(default = "default_format")]
    pub format: String,
    /// Delimiter splitting the raw tag string.
    #[serde(default = "default_tag_delimiter")]
    pub tag_delimiter: String,
    /// Character budget. Non-positive values fall back to the platform
    /// default at packing time.
    #[serde(default = "default_max_length")]
    pub max_length: i64,
    #[serde(default)]
    pub visibility: Visibility,
}

fn default_format() -> String {
    DEFAULT_STATUS_FORMAT.to_string()
}

fn default_tag_delimiter() -> String {
    DEFAULT_TAG_DELIMITER.to_string()
}

fn default_max_length() -> i64 {
    DEFAULT_MAX_LENGTH
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            tag_delimiter: default_tag_delimiter(),
            max_length: default_max_length(),
            visibility: Visibility::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            mastodon: MastodonConfig {
                instance: String::new(),
                access_token: String::new(),
            },
            status: StatusConfig::default(),
        }
    }

    /// The configured status format, or the default when unset.
    pub fn format(&self) -> &str {
        if self.status.format.is_empty() {
            DEFAULT_STATUS_FORMAT
        } else {
            &self.status.format
        }
    }

    /// The configured tag delimiter, or the default when unset.
    pub fn tag_delimiter(&self) -> &str {
        if self.status.tag_delimiter.is_empty() {
            DEFAULT_TAG_DELIMITER
        } else {
            &self.status.tag_delimiter
        }
    }

    /// Check that every setting the transport collaborator depends on is
    /// present.
    pub fn validate(&self) -> Result<()> {
        if self.mastodon.instance.is_empty() {
            return Err(ConfigError::MissingField("mastodon.instance".to_string()).into());
        }
        if self.mastodon.access_token.is_empty() {
            return Err(ConfigError::MissingField("mastodon.access_token".to_string()).into());
        }
        Ok(())
    }

    /// Boolean form of [`validate`](Config::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("LINKCAST_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("linkcast").join("config.toml"))
}

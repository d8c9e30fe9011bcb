//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and
//! presentation settings by the binary.

use dishide_application::BehaviorConfig;
use dishide_domain::{RoomId, SearchQuery};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default Yelp Fusion business search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.yelp.com/v3/businesses/search";

/// Environment variable consulted when `search.api_key` is not set
pub const API_KEY_ENV: &str = "YELP_API_KEY";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("search.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("search.limit must be between 1 and {max}, got {got}")]
    InvalidLimit { got: usize, max: usize },

    #[error("output.initial_results cannot be 0")]
    InvalidInitialResults,

    #[error("search.endpoint cannot be empty")]
    EmptyEndpoint,
}

/// Raw room configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoomConfig {
    /// Room used when `--room` is not given
    pub default: String,
    /// Directory for room files (defaults to the platform data dir)
    pub data_dir: Option<String>,
}

impl Default for FileRoomConfig {
    fn default() -> Self {
        Self {
            default: RoomId::DEFAULT.to_string(),
            data_dir: None,
        }
    }
}

/// Raw search configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Directory search endpoint
    pub endpoint: String,
    /// Default result count
    pub limit: usize,
    /// Timeout in seconds for search requests
    pub timeout_seconds: Option<u64>,
    /// API key; falls back to the `YELP_API_KEY` environment variable
    pub api_key: Option<String>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            limit: SearchQuery::DEFAULT_LIMIT,
            timeout_seconds: Some(30),
            api_key: None,
        }
    }
}

impl FileSearchConfig {
    /// API key from config, else from the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Application behavior derived from this section
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds).with_result_limit(self.limit)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Search results shown before `/more`
    pub initial_results: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            initial_results: 4,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

/// Raw announcement timing from TOML (milliseconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnnounceConfig {
    /// Play the wheel and celebration animations at all
    pub enabled: bool,
    pub spin_ms: u64,
    pub celebration_ms: u64,
    pub winner_ms: u64,
}

impl Default for FileAnnounceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spin_ms: 4200,
            celebration_ms: 2600,
            winner_ms: 3200,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write diagnostic logs to a daily file in the data dir
    pub file: bool,
    /// Write the JSONL room event log
    pub events: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            events: true,
        }
    }
}

/// Complete TOML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub room: FileRoomConfig,
    pub search: FileSearchConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub announce: FileAnnounceConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.search.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.search.limit == 0 || self.search.limit > SearchQuery::MAX_LIMIT {
            return Err(ConfigValidationError::InvalidLimit {
                got: self.search.limit,
                max: SearchQuery::MAX_LIMIT,
            });
        }

        if self.search.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        if self.output.initial_results == 0 {
            return Err(ConfigValidationError::InvalidInitialResults);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[room]
default = "friday"
data_dir = "/tmp/dishide"

[search]
endpoint = "http://localhost:9999/search"
limit = 12
timeout_seconds = 10
api_key = "secret"

[output]
color = false
initial_results = 6

[announce]
enabled = false
spin_ms = 100

[logging]
file = true
events = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.room.default, "friday");
        assert_eq!(config.room.data_dir.as_deref(), Some("/tmp/dishide"));
        assert_eq!(config.search.limit, 12);
        assert_eq!(config.search.resolve_api_key().as_deref(), Some("secret"));
        assert!(!config.output.color);
        assert_eq!(config.output.initial_results, 6);
        assert!(!config.announce.enabled);
        assert_eq!(config.announce.spin_ms, 100);
        assert_eq!(config.announce.celebration_ms, 2600);
        assert!(config.logging.file);
        assert!(!config.logging.events);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[search]
limit = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.limit, 3);
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.room.default, "demo");
        assert!(config.output.color);
        assert!(config.announce.enabled);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.search.limit, 8);
        assert_eq!(config.search.timeout_seconds, Some(30));
        assert_eq!(config.output.initial_results, 4);
        assert_eq!(config.announce.spin_ms, 4200);
        assert_eq!(config.announce.winner_ms, 3200);
        assert!(config.logging.events);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_behavior_from_search_section() {
        let config = FileConfig::default();
        let behavior = config.search.behavior();
        assert_eq!(behavior.timeout, Some(Duration::from_secs(30)));
        assert_eq!(behavior.result_limit, 8);
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[search]\ntimeout_seconds = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_limit_out_of_range() {
        let config: FileConfig = toml::from_str("[search]\nlimit = 50\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidLimit { got: 50, max: 20 })
        ));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let search = FileSearchConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        // Falls through to the environment; a blank config value never wins
        assert_ne!(search.resolve_api_key().as_deref(), Some(""));
    }
}

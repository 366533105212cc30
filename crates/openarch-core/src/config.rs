//! Configuration Management
//!
//! Handles configuration from environment variables and TOML files,
//! with defaults pointing at the public openarch.nl API.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Archive API configuration
    pub api: ApiConfig,

    /// Extraction behaviour
    pub extract: ExtractConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ArchiveConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // API
        if let Ok(url) = std::env::var("OPENARCH_API_URL") {
            config.api.api_url = url;
        }
        if let Ok(url) = std::env::var("OPENARCH_SITE_URL") {
            config.api.site_url = url;
        }
        if let Ok(lang) = std::env::var("OPENARCH_LANG") {
            config.api.lang = lang;
        }
        if let Ok(size) = std::env::var("OPENARCH_PAGE_SIZE") {
            config.api.page_size = parse_value("OPENARCH_PAGE_SIZE", size)?;
        }
        if let Ok(delay) = std::env::var("OPENARCH_REQUEST_DELAY_MS") {
            config.api.request_delay_ms = parse_value("OPENARCH_REQUEST_DELAY_MS", delay)?;
        }
        if let Ok(timeout) = std::env::var("OPENARCH_TIMEOUT_SECS") {
            config.api.timeout_secs = parse_value("OPENARCH_TIMEOUT_SECS", timeout)?;
        }

        // Extraction
        if let Ok(policy) = std::env::var("OPENARCH_GENDER_POLICY") {
            config.extract.gender_policy = policy.parse()?;
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let env_config = Self::from_env()?;
        let defaults = Self::default();

        // Only override if env values differ from defaults
        if env_config.api.api_url != defaults.api.api_url {
            self.api.api_url = env_config.api.api_url;
        }
        if env_config.api.site_url != defaults.api.site_url {
            self.api.site_url = env_config.api.site_url;
        }
        if env_config.api.lang != defaults.api.lang {
            self.api.lang = env_config.api.lang;
        }
        if env_config.api.page_size != defaults.api.page_size {
            self.api.page_size = env_config.api.page_size;
        }
        if env_config.api.request_delay_ms != defaults.api.request_delay_ms {
            self.api.request_delay_ms = env_config.api.request_delay_ms;
        }
        if env_config.api.timeout_secs != defaults.api.timeout_secs {
            self.api.timeout_secs = env_config.api.timeout_secs;
        }
        if env_config.extract.gender_policy != defaults.extract.gender_policy {
            self.extract.gender_policy = env_config.extract.gender_policy;
        }
        if env_config.logging.level != defaults.logging.level {
            self.logging.level = env_config.logging.level;
        }

        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "api.page_size".to_string(),
                value: "0".to_string(),
            });
        }
        if self.api.api_url.is_empty() {
            return Err(ConfigError::MissingRequired("api.api_url".to_string()));
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    })
}

/// Archive API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, ending in a slash
    pub api_url: String,

    /// Base URL of the human-facing site, ending in a slash
    pub site_url: String,

    /// Language of the search results
    pub lang: String,

    /// Number of results requested per search page
    pub page_size: usize,

    /// Delay after every request in milliseconds
    pub request_delay_ms: u64,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ApiConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Search endpoint, without query string
    pub fn search_endpoint(&self) -> String {
        format!("{}records/search.json?", self.api_url)
    }

    /// Document endpoint, without query string
    pub fn show_endpoint(&self) -> String {
        format!("{}records/show.json?", self.api_url)
    }

    /// Landing page prefix that is rewritten to the document endpoint
    pub fn landing_page_prefix(&self) -> String {
        format!("{}show.php?", self.site_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openarch.nl/1.0/".to_string(),
            site_url: "https://www.openarch.nl/".to_string(),
            lang: "nl".to_string(),
            page_size: 25,
            request_delay_ms: 250,
            timeout_secs: 30,
            user_agent: concat!("openarch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Extraction configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// How derived gender behaves for persons without a role
    pub gender_policy: GenderPolicy,
}

/// Derived-gender policy for persons that have no role entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// Derived gender is unknown unless the person's own role says otherwise
    #[default]
    Reset,
    /// Keep the derived gender of the previously processed person
    CarryOver,
}

impl std::str::FromStr for GenderPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "reset" => Ok(Self::Reset),
            "carry_over" | "carryover" => Ok(Self::CarryOver),
            _ => Err(ConfigError::InvalidValue {
                key: "OPENARCH_GENDER_POLICY".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

impl From<ConfigError> for crate::ArchiveError {
    fn from(err: ConfigError) -> Self {
        crate::ArchiveError::Config(err.to_string())
    }
}

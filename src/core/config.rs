//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults. Transport selection comes from command-line flags and is set
//! by the entry point.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default base URL of the RAE dictionary API.
pub const DEFAULT_API_BASE_URL: &str = "https://rae-api.com/api";

/// Default per-request timeout for dictionary calls, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Default lookup language.
pub const DEFAULT_LANG: &str = "es";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Dictionary API client configuration.
    pub dictionary: DictionaryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the dictionary API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Base URL the `words/`, `daily` and `random` endpoints hang off.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Language reported for lookups that do not name one.
    pub default_lang: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            default_lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "rae-api-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            dictionary: DictionaryConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`), dictionary settings the `RAE_` prefix
    /// (`RAE_API_BASE_URL`, `RAE_API_TIMEOUT_SECS`, `RAE_DEFAULT_LANG`).
    /// Values that cannot be used are logged and replaced by defaults.
    pub fn from_env() -> Self {
        let (config, warnings) = Self::from_env_with_warnings();
        for warning in &warnings {
            warn!("{}", warning);
        }
        config
    }

    /// Like [`Config::from_env`], but hands back the warnings instead of
    /// logging them, for callers that set up logging from this config.
    pub fn from_env_with_warnings() -> (Self, Vec<String>) {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("RAE_API_BASE_URL") {
            config.dictionary.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("RAE_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.dictionary.timeout_secs = secs,
                _ => warnings.push(format!(
                    "Ignoring invalid RAE_API_TIMEOUT_SECS={:?}, using {}s",
                    timeout, DEFAULT_API_TIMEOUT_SECS
                )),
            }
        }

        if let Ok(lang) = std::env::var("RAE_DEFAULT_LANG") {
            if !lang.is_empty() {
                config.dictionary.default_lang = lang;
            }
        }

        (config, warnings)
    }

    /// Replace the transport configuration.
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

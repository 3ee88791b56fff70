//! Configuration module
//!
//! An optional TOML file supplies the source URL, HTTP settings and output
//! defaults. Every key may be omitted; command-line flags override it.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use olympos_core::constants::DEFAULT_SOURCE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Source document configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how to fetch the source document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// URL of the plain-text document
    pub url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// `olympos/<version>`
pub fn default_user_agent() -> String {
    format!("olympos/{}", env!("CARGO_PKG_VERSION"))
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Check values that parse but cannot be used
    pub fn validate(&self) -> Result<(), CliError> {
        self.validate_source_url()?;
        self.validate_settings()
    }

    /// Check that the source URL is an absolute http or https URL
    pub fn validate_source_url(&self) -> Result<(), CliError> {
        let url = reqwest::Url::parse(&self.source.url).map_err(|e| {
            CliError::ConfigError(format!("invalid source url '{}': {e}", self.source.url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CliError::ConfigError(format!(
                "unsupported url scheme '{}', expected http or https",
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Check the settings every run uses, whatever the source
    pub fn validate_settings(&self) -> Result<(), CliError> {
        if self.source.timeout_secs == 0 {
            return Err(CliError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.source.user_agent.trim().is_empty() {
            return Err(CliError::ConfigError(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

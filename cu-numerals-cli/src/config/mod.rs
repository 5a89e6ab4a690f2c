//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use cu_numerals_core::{Dialect, FormatOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Formatting configuration
    #[serde(default)]
    pub format: FormatConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Formatting-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Dialect name ("standard" or "old")
    pub dialect: String,

    /// Add titlo to formatted numerals
    pub add_titlo: bool,

    /// Write a plain space instead of a no-break space between groups
    pub plain_spaces: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default().to_string(),
            add_titlo: true,
            plain_spaces: false,
        }
    }
}

impl FormatConfig {
    /// Validate the dialect name and build codec options
    pub fn options(&self) -> Result<FormatOptions> {
        let dialect: Dialect = self
            .dialect
            .parse()
            .map_err(|e| CliError::ConfigError(format!("{e}")))?;
        Ok(FormatOptions::builder()
            .dialect(dialect)
            .add_titlo(self.add_titlo)
            .build())
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

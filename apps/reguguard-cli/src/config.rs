//! Configuration parsing for report rendering
//!
//! Settings come from an optional TOML file; command-line flags take
//! precedence over anything set here.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::reporter::OutputFormat;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use reguguard_cli::{config::Config, OutputFormat};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str("[report]\nformat = \"json\"")?;
    /// assert_eq!(config.report.format, OutputFormat::Json);
    /// assert!(config.report.show_remediation);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// How results are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format (default: console)
    #[serde(default)]
    pub format: OutputFormat,
    /// List a remediation suggestion under each non-compliant clause (default: true)
    #[serde(default = "default_show_remediation")]
    pub show_remediation: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_remediation: default_show_remediation(),
        }
    }
}

fn default_show_remediation() -> bool {
    true
}

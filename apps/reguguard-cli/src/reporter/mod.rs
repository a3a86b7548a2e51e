//! Compliance report rendering
//!
//! # Output Formats
//!
//! - **Console**: Human-readable table with status symbols
//! - **Markdown**: Documentation-friendly format for reports
//! - **JSON**: Machine-readable format, compact or pretty-printed
//!
//! # Example
//!
//! ```no_run
//! use compliance_engine::{samples, ComplianceEngine};
//! use reguguard_cli::reporter::{OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = ComplianceEngine::new().check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "results.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod markdown;

use anyhow::Result;
use compliance_engine::ComplianceReport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::CliError;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for compliance reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Console output with table and summary
    #[default]
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Markdown format for documentation
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// Reporter for compliance results
pub struct Reporter {
    format: OutputFormat,
    show_remediation: bool,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_remediation: true,
        }
    }

    /// Toggle the remediation section (ignored by JSON output)
    pub fn with_remediation(mut self, show: bool) -> Self {
        self.show_remediation = show;
        self
    }

    /// Report results to stdout
    pub fn report(&self, report: &ComplianceReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &ComplianceReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &ComplianceReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format(report, self.show_remediation),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Markdown => MarkdownReporter::format(report, self.show_remediation),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

/// Clause text cut to `max` characters, ending in an ellipsis when shortened
pub(crate) fn truncate_clause(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

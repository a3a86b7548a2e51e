//! ReguGuard command-line front end
//!
//! Loads a company SOP and a regulation document, runs the line-by-line
//! compliance comparison, and renders the outcome.
//!
//! # Example
//!
//! ```no_run
//! use reguguard_cli::{input::DocumentSource, reporter::{OutputFormat, Reporter}};
//! use compliance_engine::{samples, ComplianceEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let company = DocumentSource::File("sop.txt".into()).read(samples::DEFAULT_SOP)?;
//! let regulation = DocumentSource::Sample.read(samples::DEFAULT_REGULATION)?;
//!
//! let report = ComplianceEngine::new().check(&company, &regulation);
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Report defaults can be kept in a TOML file passed with `--config`:
//!
//! ```toml
//! [report]
//! format = "markdown"
//! show_remediation = false
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod reporter;

pub use config::Config;
pub use error::CliError;
pub use reporter::{OutputFormat, Reporter};

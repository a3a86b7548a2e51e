//! Error types for the ReguGuard CLI

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown output format: {0}. Use console, json, json-pretty or markdown")]
    UnknownFormat(String),

    #[error("Only one document can be read from stdin")]
    MultipleStdinInputs,
}

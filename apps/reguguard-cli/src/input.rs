//! Where each document's text comes from

use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Built-in sample text
    Sample,
    /// Standard input
    Stdin,
    /// A text file on disk
    File(PathBuf),
}

impl DocumentSource {
    /// `None` selects the sample, `-` selects stdin, anything else is a path
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => DocumentSource::Sample,
            Some("-") => DocumentSource::Stdin,
            Some(path) => DocumentSource::File(PathBuf::from(path)),
        }
    }

    pub fn read(&self, sample: &str) -> anyhow::Result<String> {
        match self {
            DocumentSource::Sample => Ok(sample.to_string()),
            DocumentSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read document from stdin")?;
                Ok(text)
            }
            DocumentSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read document: {}", path.display())),
        }
    }
}

/// Stdin can only feed one of the two documents
pub fn check_sources(company: &DocumentSource, regulation: &DocumentSource) -> Result<(), CliError> {
    if *company == DocumentSource::Stdin && *regulation == DocumentSource::Stdin {
        return Err(CliError::MultipleStdinInputs);
    }
    Ok(())
}

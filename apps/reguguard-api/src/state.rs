//! Application state for ReguGuard API

use anyhow::{Context, Result};
use compliance_engine::ComplianceEngine;

/// Default per-document size limit (1 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Worst-case JSON string growth (a control character becomes `\u00XX`)
const JSON_ESCAPE_FACTOR: usize = 6;

/// Room for field names, quotes and whitespace around the two documents
const JSON_ENVELOPE_BYTES: usize = 4 * 1024;

pub struct AppState {
    pub engine: ComplianceEngine,
    pub max_document_bytes: usize,
}

impl AppState {
    pub fn new(max_document_bytes: usize) -> Self {
        Self {
            engine: ComplianceEngine::new(),
            max_document_bytes,
        }
    }

    /// Reads `REGUGUARD_MAX_DOCUMENT_BYTES`, falling back to the default
    pub fn from_env() -> Result<Self> {
        let max_document_bytes = match std::env::var("REGUGUARD_MAX_DOCUMENT_BYTES") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid REGUGUARD_MAX_DOCUMENT_BYTES: {}", value))?,
            Err(_) => DEFAULT_MAX_DOCUMENT_BYTES,
        };

        tracing::info!("Maximum document size: {} bytes", max_document_bytes);
        Ok(Self::new(max_document_bytes))
    }

    /// Request body limit: both documents fully escaped plus the JSON envelope
    pub fn body_limit(&self) -> usize {
        self.max_document_bytes
            .saturating_mul(2 * JSON_ESCAPE_FACTOR)
            .saturating_add(JSON_ENVELOPE_BYTES)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_BYTES)
    }
}

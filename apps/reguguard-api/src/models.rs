//! Request and response bodies for ReguGuard API

use serde::{Deserialize, Serialize};

/// Documents to compare; a missing field falls back to the sample document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub company_text: Option<String>,
    #[serde(default)]
    pub regulation_text: Option<String>,
}

/// Pre-filled sample documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesResponse {
    pub company_text: String,
    pub regulation_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

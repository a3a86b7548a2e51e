//! Complete outcome of one comparison run, as handed to renderers

use serde::{Deserialize, Serialize};
use shared_types::{ComplianceSummary, ResultSet};

use crate::remediation::{remediations, Remediation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub results: ResultSet,
    pub summary: ComplianceSummary,
    pub remediations: Vec<Remediation>,
}

impl ComplianceReport {
    pub fn from_results(results: ResultSet) -> Self {
        let summary = results.summary();
        let remediations = remediations(&results);
        Self {
            results,
            summary,
            remediations,
        }
    }
}

//! Remediation suggestions for clauses the policy does not cover

use serde::{Deserialize, Serialize};
use shared_types::ResultSet;

/// Suggestion shown for every non-compliant clause
pub const REMEDIATION_SUGGESTION: &str = "Update SOP to explicitly include this requirement \
with assigned responsibility, measurable controls, and documentation process.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    pub clause_text: String,
    pub suggestion: String,
}

/// One remediation per non-compliant clause, in result order
pub fn remediations(results: &ResultSet) -> Vec<Remediation> {
    results
        .non_compliant()
        .map(|result| Remediation {
            clause_text: result.clause_text.clone(),
            suggestion: REMEDIATION_SUGGESTION.to_string(),
        })
        .collect()
}

//! JSON reporter for compliance results

use anyhow::Result;
use compliance_engine::ComplianceReport;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a compliance report as JSON, optionally pretty-printed
    pub fn format(report: &ComplianceReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compliance_engine::{samples, ComplianceEngine};

    #[test]
    fn test_json_format_compact() {
        let report = ComplianceEngine::new().check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);
        let output = JsonReporter::format(&report, false).unwrap();

        // Compact JSON should not have newlines
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_json_format_pretty() {
        let report = ComplianceEngine::new().check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);
        let output = JsonReporter::format(&report, true).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_json_shape() {
        let report = ComplianceEngine::new().check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);
        let output = JsonReporter::format(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert_eq!(value["results"][0]["match_score"], 0.74);
        assert_eq!(value["results"][3]["status"], "Non-Compliant");
        assert_eq!(value["summary"]["non_compliant"], 1);
        assert_eq!(value["remediations"].as_array().unwrap().len(), 1);
    }
}

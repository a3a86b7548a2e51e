pub mod remediation;
pub mod report;
pub mod samples;
pub mod similarity;
pub mod tiers;

pub use remediation::{Remediation, REMEDIATION_SUGGESTION};
pub use report::ComplianceReport;

use shared_types::{ComparisonResult, Document, ResultSet};

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score every non-blank regulation line against the company policy
    ///
    /// Never fails: empty or whitespace-only input yields an empty result set,
    /// and an empty policy scores every clause 0.0.
    pub fn compare(&self, company_text: &str, regulation_text: &str) -> ResultSet {
        let company_lines: Vec<&str> = Document::new(company_text).lines().collect();

        let results: ResultSet = Document::new(regulation_text)
            .clauses()
            .map(|clause| {
                let score = best_match_score(clause, &company_lines);
                let status = tiers::classify(score);
                tracing::debug!(clause, score, %status, "Scored clause");

                ComparisonResult {
                    clause_text: clause.to_string(),
                    match_score: round_score(score),
                    status,
                }
            })
            .collect();

        tracing::debug!(
            clauses = results.len(),
            company_lines = company_lines.len(),
            "Comparison complete"
        );
        results
    }

    /// Compare and bundle results with summary counts and remediations
    pub fn check(&self, company_text: &str, regulation_text: &str) -> ComplianceReport {
        ComplianceReport::from_results(self.compare(company_text, regulation_text))
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`ComplianceEngine::compare`]
pub fn compare(company_text: &str, regulation_text: &str) -> ResultSet {
    ComplianceEngine::new().compare(company_text, regulation_text)
}

/// Highest similarity between `clause` and any company line, 0.0 when there are none
pub fn best_match_score(clause: &str, company_lines: &[&str]) -> f64 {
    company_lines
        .iter()
        .map(|line| similarity::similarity_ratio(clause, line))
        .fold(0.0, f64::max)
}

/// Two-decimal display rounding, half away from zero
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ComplianceStatus;

    const BREACH_CLAUSE: &str = "Data breach incidents must be reported within 72 hours.";

    #[test]
    fn test_identical_line_is_compliant() {
        let engine = ComplianceEngine::new();
        let results = engine.compare(
            "Employees must complete safety training.\nVisitors sign in.",
            "Employees must complete safety training.",
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results.results()[0].match_score, 1.0);
        assert_eq!(results.results()[0].status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_empty_policy_scores_zero() {
        let engine = ComplianceEngine::new();
        let results = engine.compare("", "Clause one.\nClause two.");

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.match_score, 0.0);
            assert_eq!(result.status, ComplianceStatus::NonCompliant);
        }
    }

    #[test]
    fn test_blank_regulation_lines_are_skipped() {
        let engine = ComplianceEngine::new();
        let results = engine.compare("policy", "\n   \nFirst clause\n\t\nSecond clause\n\n");

        let clauses: Vec<_> = results.iter().map(|r| r.clause_text.as_str()).collect();
        assert_eq!(clauses, vec!["First clause", "Second clause"]);
    }

    #[test]
    fn test_empty_regulation_yields_empty_results() {
        let engine = ComplianceEngine::new();
        assert!(engine.compare(samples::DEFAULT_SOP, "").is_empty());
        assert!(engine.compare("", "").is_empty());
        assert!(engine.compare("", " \n\t\n").is_empty());
    }

    #[test]
    fn test_boundary_scores_fall_to_lower_tier() {
        let engine = ComplianceEngine::new();

        let at_compliant_bound = engine.compare("abce", "abcd");
        assert_eq!(at_compliant_bound.results()[0].match_score, 0.75);
        assert_eq!(at_compliant_bound.results()[0].status, ComplianceStatus::Partial);

        let at_partial_bound = engine.compare("axy", "ab");
        assert_eq!(at_partial_bound.results()[0].match_score, 0.4);
        assert_eq!(at_partial_bound.results()[0].status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_classification_uses_unrounded_score() {
        // Displays as 0.75 but stays below the compliant bound
        let score = 0.7496;
        assert_eq!(round_score(score), 0.75);
        assert_eq!(tiers::classify(score), ComplianceStatus::Partial);
    }

    #[test]
    fn test_reworded_clause_is_at_least_partial() {
        let engine = ComplianceEngine::new();
        let results = engine.compare(
            "Financial records should be reviewed annually.",
            "Financial records must be audited every year.",
        );

        let result = &results.results()[0];
        assert!(result.match_score > 0.40);
        assert!(result.status >= ComplianceStatus::Partial);
    }

    #[test]
    fn test_unrelated_clause_against_sample_policy() {
        let engine = ComplianceEngine::new();
        let results = engine.compare(samples::DEFAULT_SOP, BREACH_CLAUSE);

        assert_eq!(results.results()[0].status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_sample_documents() {
        let engine = ComplianceEngine::new();
        let results = engine.compare(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);

        let outcome: Vec<_> = results
            .iter()
            .map(|r| (r.match_score, r.status))
            .collect();
        assert_eq!(
            outcome,
            vec![
                (0.74, ComplianceStatus::Partial),
                (0.64, ComplianceStatus::Partial),
                (0.5, ComplianceStatus::Partial),
                (0.4, ComplianceStatus::NonCompliant),
            ]
        );
    }

    #[test]
    fn test_blank_policy_lines_still_participate() {
        // A blank company line scores 0.0 and never beats a real match
        let with_blank = best_match_score("abcd", &["", "abce"]);
        let without_blank = best_match_score("abcd", &["abce"]);
        assert_eq!(with_blank, without_blank);
        assert_eq!(best_match_score("abcd", &[""]), 0.0);
        assert_eq!(best_match_score("abcd", &[]), 0.0);
    }

    #[test]
    fn test_check_builds_report() {
        let engine = ComplianceEngine::default();
        let report = engine.check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.compliant, 0);
        assert_eq!(report.summary.partial, 3);
        assert_eq!(report.summary.non_compliant, 1);
        assert_eq!(report.remediations.len(), 1);
        assert_eq!(report.remediations[0].clause_text, BREACH_CLAUSE);
        assert_eq!(report.remediations[0].suggestion, REMEDIATION_SUGGESTION);
    }

    #[test]
    fn test_form_feed_and_unicode_separators_split_clauses() {
        let engine = ComplianceEngine::new();
        let results = engine.compare(
            "Encrypt all data.",
            "Encrypt all data.\x0cReport breaches.\u{2028}Train staff.",
        );

        let clauses: Vec<_> = results.iter().map(|r| r.clause_text.as_str()).collect();
        assert_eq!(clauses, vec!["Encrypt all data.", "Report breaches.", "Train staff."]);
        assert_eq!(results.results()[0].status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_clause_text_is_not_normalized() {
        let engine = ComplianceEngine::new();
        let results = engine.compare("all data encrypted", "  ALL DATA ENCRYPTED  \r\n");

        assert_eq!(results.results()[0].clause_text, "  ALL DATA ENCRYPTED  ");
        assert!(results.results()[0].match_score < 1.0);
    }
}

//! Markdown reporter for compliance results

use anyhow::Result;
use compliance_engine::ComplianceReport;
use std::fmt::Write;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn format(report: &ComplianceReport, show_remediation: bool) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Compliance Results")?;
        writeln!(output)?;
        writeln!(output, "| Regulation Clause | Match Score | Status |")?;
        writeln!(output, "|---|---:|---|")?;
        for result in &report.results {
            writeln!(
                output,
                "| {} | {:.2} | {} {} |",
                escape_cell(&result.clause_text),
                result.match_score,
                result.status.symbol(),
                result.status.label()
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        writeln!(output, "- Compliant Clauses: {}", report.summary.compliant)?;
        writeln!(output, "- Partial Matches: {}", report.summary.partial)?;
        writeln!(output, "- Non-Compliant Clauses: {}", report.summary.non_compliant)?;

        if show_remediation && !report.remediations.is_empty() {
            writeln!(output)?;
            writeln!(output, "## Suggested Remediation")?;
            for remediation in &report.remediations {
                writeln!(output)?;
                writeln!(output, "**Clause:** {}", escape_cell(&remediation.clause_text))?;
                writeln!(output)?;
                writeln!(output, "> Suggestion: {}", remediation.suggestion)?;
            }
        }

        Ok(output)
    }
}

// Pipes would split the table cell; surrounding whitespace is kept verbatim
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

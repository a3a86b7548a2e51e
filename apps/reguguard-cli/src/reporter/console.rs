//! Console reporter for compliance results
//!
//! Provides human-readable output with an ASCII table and status indicators.

use anyhow::Result;
use compliance_engine::ComplianceReport;
use shared_types::ComplianceStatus;
use std::fmt::Write;

use super::truncate_clause;

const CLAUSE_HEADER: &str = "Regulation Clause";
const MAX_CLAUSE_WIDTH: usize = 60;
/// Terminal columns of a status cell: two-column symbol, space, longest label
const STATUS_WIDTH: usize = 16;
const SYMBOL_COLUMNS: usize = 2;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a compliance report for console output
    pub fn format(report: &ComplianceReport, show_remediation: bool) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                     COMPLIANCE RESULTS                       ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        Self::format_table(&mut output, report)?;
        Self::format_summary(&mut output, report)?;

        if show_remediation && !report.remediations.is_empty() {
            writeln!(output, "────────────────────────────────────────────────────────────────")?;
            writeln!(output, "Suggested Remediation:")?;
            for remediation in &report.remediations {
                writeln!(output)?;
                writeln!(output, "  • Clause: {}", remediation.clause_text)?;
                writeln!(output, "    Suggestion: {}", remediation.suggestion)?;
            }
            writeln!(output)?;
        }

        Ok(output)
    }

    fn format_table(output: &mut String, report: &ComplianceReport) -> Result<()> {
        let width = report
            .results
            .iter()
            .map(|r| r.clause_text.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(CLAUSE_HEADER.len(), MAX_CLAUSE_WIDTH);

        let clause_bar = "─".repeat(width + 2);
        let status_bar = "─".repeat(STATUS_WIDTH + 2);

        writeln!(output, "  ┌{}┬───────┬{}┐", clause_bar, status_bar)?;
        writeln!(
            output,
            "  │ {:<width$} │ Score │ {:<STATUS_WIDTH$} │",
            CLAUSE_HEADER, "Status"
        )?;
        writeln!(output, "  ├{}┼───────┼{}┤", clause_bar, status_bar)?;

        for result in &report.results {
            writeln!(
                output,
                "  │ {:<width$} │ {:>5.2} │ {} │",
                truncate_clause(&result.clause_text, width),
                result.match_score,
                status_cell(result.status)
            )?;
        }

        writeln!(output, "  └{}┴───────┴{}┘", clause_bar, status_bar)?;
        if report.results.is_empty() {
            writeln!(output, "  No regulation clauses to evaluate.")?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn format_summary(output: &mut String, report: &ComplianceReport) -> Result<()> {
        writeln!(output, "Summary:")?;
        for status in ComplianceStatus::ALL {
            let label = match status {
                ComplianceStatus::Compliant => "Compliant Clauses:",
                ComplianceStatus::Partial => "Partial Matches:",
                ComplianceStatus::NonCompliant => "Non-Compliant Clauses:",
            };
            writeln!(
                output,
                "  {} {:<23} {}",
                status.symbol(),
                label,
                report.summary.count(status)
            )?;
        }
        writeln!(output)?;
        Ok(())
    }
}

/// Symbol and label, padded by terminal columns rather than chars
fn status_cell(status: ComplianceStatus) -> String {
    let label = status.label();
    let used = SYMBOL_COLUMNS + 1 + label.len();
    format!(
        "{} {}{}",
        status.symbol(),
        label,
        " ".repeat(STATUS_WIDTH.saturating_sub(used))
    )
}

//! End-to-end checks of the CLI pipeline: files in, rendered report out

use compliance_engine::{samples, ComplianceEngine, ComplianceReport};
use pretty_assertions::assert_eq;
use reguguard_cli::input::DocumentSource;
use reguguard_cli::{Config, OutputFormat, Reporter};
use std::fs;

#[test]
fn file_documents_produce_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let company_path = dir.path().join("sop.txt");
    let regulation_path = dir.path().join("regulation.txt");
    let output_path = dir.path().join("report.json");

    fs::write(&company_path, "Visitors must sign in.\nAll customer data must be encrypted.\n").unwrap();
    fs::write(
        &regulation_path,
        "All customer data must be encrypted.\n\n   \nData breach incidents must be reported within 72 hours.\n",
    )
    .unwrap();

    let company = DocumentSource::File(company_path).read(samples::DEFAULT_SOP).unwrap();
    let regulation = DocumentSource::File(regulation_path)
        .read(samples::DEFAULT_REGULATION)
        .unwrap();
    let report = ComplianceEngine::new().check(&company, &regulation);

    Reporter::new(OutputFormat::Json)
        .write_to_file(&report, &output_path)
        .unwrap();

    let written: ComplianceReport = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written, report);
    assert_eq!(written.summary.total, 2);
    assert_eq!(written.summary.compliant, 1);
    assert_eq!(written.summary.non_compliant, 1);
}

#[test]
fn config_file_drives_reporter() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("reguguard.toml");
    fs::write(&config_path, "[report]\nformat = \"markdown\"\nshow_remediation = false\n").unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let report = ComplianceEngine::new().check(samples::DEFAULT_SOP, samples::DEFAULT_REGULATION);
    let output = Reporter::new(config.report.format)
        .with_remediation(config.report.show_remediation)
        .format_report(&report)
        .unwrap();

    assert!(output.starts_with("# Compliance Results"));
    assert!(!output.contains("Suggested Remediation"));
}

#[test]
fn sample_sources_fall_back_to_builtin_documents() {
    let company = DocumentSource::from_arg(None).read(samples::DEFAULT_SOP).unwrap();
    let regulation = DocumentSource::from_arg(None)
        .read(samples::DEFAULT_REGULATION)
        .unwrap();

    let report = ComplianceEngine::new().check(&company, &regulation);
    assert_eq!(report.summary.partial, 3);
    assert_eq!(report.summary.non_compliant, 1);
}

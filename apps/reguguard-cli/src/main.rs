//! ReguGuard CLI Binary
//!
//! Compares a company SOP against a regulation and prints the compliance report.

use anyhow::Result;
use clap::Parser;
use compliance_engine::{samples, ComplianceEngine};
use reguguard_cli::input::{check_sources, DocumentSource};
use reguguard_cli::{Config, OutputFormat, Reporter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "reguguard")]
#[command(
    version,
    about = "Line-by-line compliance check of a company SOP against a regulation"
)]
struct Args {
    /// Company SOP file ("-" for stdin, sample SOP when omitted)
    #[arg(short, long)]
    company: Option<String>,

    /// Regulation file ("-" for stdin, sample regulation when omitted)
    #[arg(short, long)]
    regulation: Option<String>,

    /// Output format: console, json, json-pretty or markdown
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// TOML config file with report defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Omit the suggested remediation section
    #[arg(long)]
    no_remediation: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let format = args.format.unwrap_or(config.report.format);
    let show_remediation = config.report.show_remediation && !args.no_remediation;

    let company_source = DocumentSource::from_arg(args.company.as_deref());
    let regulation_source = DocumentSource::from_arg(args.regulation.as_deref());
    check_sources(&company_source, &regulation_source)?;

    let company_text = company_source.read(samples::DEFAULT_SOP)?;
    let regulation_text = regulation_source.read(samples::DEFAULT_REGULATION)?;
    tracing::info!(
        company = ?company_source,
        regulation = ?regulation_source,
        "Running compliance check"
    );

    let report = ComplianceEngine::new().check(&company_text, &regulation_text);
    tracing::info!(
        clauses = report.summary.total,
        non_compliant = report.summary.non_compliant,
        "Compliance check complete"
    );

    let reporter = Reporter::new(format).with_remediation(show_remediation);
    match &args.output {
        Some(path) => {
            reporter.write_to_file(&report, path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&report)?,
    }

    Ok(())
}

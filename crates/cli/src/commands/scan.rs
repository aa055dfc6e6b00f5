//! Snapshot scanning command.
//!
//! The host framework does the heavy lifting (parsing, type resolution, CFG
//! construction) and exports its resolved model as a JSON snapshot; this
//! command loads that snapshot and runs the detectors over it.

use anyhow::{Context, Result};
use clap::Args;
use colored::{ColoredString, Colorize};
use kansa_detectors::{AnalysisReport, DetectionEngine, Severity};
use kansa_model::ContractSet;
use std::path::PathBuf;

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Snapshot JSON exported by the analysis host
    #[arg(short, long)]
    input: PathBuf,

    /// Run only the named detectors (repeatable)
    #[arg(short, long = "detector")]
    detectors: Vec<String>,

    #[arg(short, long)]
    verbose: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let snapshot = ContractSet::from_path(&args.input)
        .with_context(|| format!("failed to load snapshot: {}", args.input.display()))?;

    if args.verbose {
        println!(
            "🔍 Loaded {} contract(s) from {}",
            snapshot.len(),
            args.input.display()
        );
    }

    let engine = DetectionEngine::with_defaults();
    let report = if args.detectors.is_empty() {
        engine.run(&snapshot)?
    } else {
        let ids: Vec<&str> = args.detectors.iter().map(String::as_str).collect();
        engine.run_detectors(&ids, &snapshot)?
    };

    print_report(&report, args.verbose);
    Ok(())
}

fn print_report(report: &AnalysisReport, verbose: bool) {
    if report.is_empty() {
        println!("{}", "✅ No findings".bright_green().bold());
        return;
    }

    println!(
        "{}",
        format!("Findings: {}", report.findings().len()).bold()
    );
    println!("{}", "=".repeat(50));

    for finding in report.findings() {
        println!("\n{} {}", severity_label(finding.severity), finding.title.bold());
        println!(
            "   Detector: {} | Confidence: {}",
            finding.detector_id, finding.confidence
        );
        if let (Some(contract), Some(function)) = (&finding.contract, &finding.function) {
            println!("   Element: {}.{}", contract, function);
        }
        if let Some(limit) = finding.transfer_limit {
            println!("   Limit: {}", limit);
        }
        println!("   {}", finding.message);
    }

    let count = report.count_by_severity();
    println!("\n{}", "Summary".bold());
    println!("   Critical: {}", count.critical);
    println!("   High: {}", count.high);
    println!("   Medium: {}", count.medium);
    println!("   Low: {}", count.low);
    println!("   Informational: {}", count.informational);

    if verbose {
        println!("   Generated at: {}", report.generated_at());
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Critical => "[Critical]".bright_red().bold(),
        Severity::High => "[High]".red(),
        Severity::Medium => "[Medium]".yellow(),
        Severity::Low => "[Low]".bright_yellow(),
        Severity::Informational => "[Info]".blue(),
    }
}

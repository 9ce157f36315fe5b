// tolerance/src/commands/check.rs
//
// USE CASE: Check one statistics snapshot against the job's error limit.

use std::path::PathBuf;

use anyhow::Context;
use tolerance_core::application::ToleranceReport;
use tolerance_core::infrastructure::config::{load_job_config, load_snapshot};

use crate::cli::OutputFormat;

pub fn execute(job_dir: PathBuf, snapshot: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    // A. Load the Config (Infra)
    let config = load_job_config(&job_dir)
        .with_context(|| format!("Failed to load job configuration from {:?}", job_dir))?;

    let policy = match config.error_limit.to_policy() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    // B. Load the snapshot produced by the collector
    let stats = load_snapshot(&snapshot)
        .with_context(|| format!("Failed to load statistics snapshot from {:?}", snapshot))?;

    // C. Report
    let report = ToleranceReport::evaluate(&policy, &stats);
    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print_report(&config.name, &report),
    }

    // D. Enforce (hard stop for the job runner / CI)
    if let Some(violation) = report.violation {
        eprintln!("{:?}", miette::Report::new(violation.payload));
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(job_name: &str, report: &ToleranceReport) {
    println!("🚦 Job: {}", job_name);
    println!("   Limit: {}", report.limit);
    println!("   Read records:  {}", report.total_read_records);
    println!("   Dirty records: {}", report.total_error_records);
    match report.error_ratio {
        Some(ratio) => println!("   Dirty ratio:   {:.4}%", ratio * 100.0),
        None => println!("   Dirty ratio:   n/a (nothing read yet)"),
    }

    match &report.violation {
        None => println!("\n✅ PASS. Dirty data within tolerance."),
        Some(violation) => println!("\n❌ FAILURE. {}", violation.message),
    }
}

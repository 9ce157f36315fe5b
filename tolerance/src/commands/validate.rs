// tolerance/src/commands/validate.rs
//
// USE CASE: Validate the job's error-limit configuration.

use std::path::PathBuf;

use anyhow::Context;
use tolerance_core::ErrorLimit;
use tolerance_core::infrastructure::config::load_job_config;

pub fn execute(job_dir: PathBuf) -> anyhow::Result<()> {
    println!("⚙️  Loading job configuration...");
    let config = load_job_config(&job_dir)
        .with_context(|| format!("Failed to load job configuration from {:?}", job_dir))?;
    println!("   Job: {}", config.name);

    let policy = match config.error_limit.to_policy() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    println!("   Effective limit: {}", policy.limit());
    if let (ErrorLimit::Records(_), Some(percentage)) =
        (policy.limit(), config.error_limit.percentage)
    {
        println!(
            "   ⚠️  Percentage limit {} ignored: the record limit takes precedence",
            percentage
        );
    }

    println!("✨ Configuration is valid.");
    Ok(())
}

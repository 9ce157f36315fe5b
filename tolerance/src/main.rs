// tolerance/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // Logs go to stderr so that `check --format json` keeps stdout parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { job_dir } => commands::validate::execute(job_dir),
        Commands::Check {
            snapshot,
            job_dir,
            format,
        } => commands::check::execute(job_dir, snapshot, format),
    }
}

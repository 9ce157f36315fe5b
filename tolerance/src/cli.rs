// tolerance/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tolerance")]
#[command(about = "Dirty-record error-limit enforcement for data sync jobs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧾 Validates the job's error-limit configuration and shows the effective limit
    Validate {
        /// Job directory (holds tolerance.yaml)
        #[arg(long, default_value = ".")]
        job_dir: PathBuf,
    },

    /// 🚦 Checks a statistics snapshot against the job's error limit
    Check {
        /// Statistics snapshot (.json, .yaml or .yml)
        #[arg(long, short)]
        snapshot: PathBuf,

        /// Job directory (holds tolerance.yaml)
        #[arg(long, default_value = ".")]
        job_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["tolerance", "validate"]);
        match args.command {
            Commands::Validate { job_dir } => {
                assert_eq!(job_dir.to_string_lossy(), ".");
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_check() -> Result<()> {
        let args = Cli::parse_from([
            "tolerance",
            "check",
            "-s",
            "stats.json",
            "--job-dir",
            "/tmp",
            "--format",
            "json",
        ]);
        match args.command {
            Commands::Check {
                snapshot,
                job_dir,
                format,
            } => {
                assert_eq!(snapshot.to_string_lossy(), "stats.json");
                assert_eq!(job_dir.to_string_lossy(), "/tmp");
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_requires_snapshot() {
        assert!(Cli::try_parse_from(["tolerance", "check"]).is_err());
    }
}

// tolerance-core/src/infrastructure/config/job.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::tolerance::{ConfigurationError, ErrorTolerancePolicy};
use crate::infrastructure::error::InfrastructureError;

pub const RECORD_LIMIT_ENV: &str = "TOLERANCE_ERROR_LIMIT_RECORD";
pub const PERCENTAGE_LIMIT_ENV: &str = "TOLERANCE_ERROR_LIMIT_PERCENTAGE";

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct JobConfig {
    #[validate(length(min = 1, message = "Job name cannot be empty"))]
    pub name: String,

    #[validate(nested)]
    #[serde(rename = "error-limit", default)]
    pub error_limit: ErrorLimitConfig,
}

/// Raw `error-limit` block, before precedence is applied.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default, PartialEq)]
pub struct ErrorLimitConfig {
    #[validate(range(min = 0, message = "Dirty record limit must be non-negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<i64>,

    #[validate(range(min = 0.0, max = 1.0, message = "Dirty record percentage must be within [0.0, 1.0]"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl ErrorLimitConfig {
    pub fn to_policy(&self) -> Result<ErrorTolerancePolicy, ConfigurationError> {
        if let (Some(record), Some(percentage)) = (self.record, self.percentage) {
            warn!(
                record,
                percentage,
                "error-limit.percentage is ignored: the record limit takes precedence"
            );
        }
        ErrorTolerancePolicy::new(self.record, self.percentage)
    }
}

#[instrument(skip(job_dir))]
pub fn load_job_config(job_dir: &Path) -> Result<JobConfig, InfrastructureError> {
    let config_path = find_job_config(job_dir)?;
    info!(path = ?config_path, "Loading job configuration");

    let content = fs::read_to_string(&config_path)?;
    let mut config: JobConfig = serde_yaml::from_str(&content)?;

    // Layering: TOLERANCE_ERROR_LIMIT_RECORD=0 tolerance check ...
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config.validate()?;
    Ok(config)
}

fn find_job_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["tolerance.yaml", "tolerance.yml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

/// Layers environment values over the file. An empty value clears the limit.
pub fn apply_env_overrides<F>(config: &mut JobConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(RECORD_LIMIT_ENV) {
        let new = parse_override::<i64>(RECORD_LIMIT_ENV, &raw)?;
        info!(old = ?config.error_limit.record, new = ?new, "Overriding record limit via ENV");
        config.error_limit.record = new;
    }
    if let Some(raw) = lookup(PERCENTAGE_LIMIT_ENV) {
        let new = parse_override::<f64>(PERCENTAGE_LIMIT_ENV, &raw)?;
        info!(old = ?config.error_limit.percentage, new = ?new, "Overriding percentage limit via ENV");
        config.error_limit.percentage = new;
    }
    Ok(())
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<Option<T>, InfrastructureError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|_| {
        InfrastructureError::ConfigError(format!("{} has an unparsable value '{}'", key, raw))
    })
}

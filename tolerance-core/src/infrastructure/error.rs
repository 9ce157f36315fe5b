// tolerance-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(tolerance::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(tolerance::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(code(tolerance::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(tolerance::infra::validation),
        help("'error-limit.record' must be >= 0 and 'error-limit.percentage' within [0.0, 1.0].")
    )]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(tolerance::infra::config))]
    ConfigError(String),

    #[error("Job configuration not found: {0}")]
    #[diagnostic(code(tolerance::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Unsupported snapshot format: {0}")]
    #[diagnostic(
        code(tolerance::infra::snapshot_format),
        help("Snapshots are read from .json, .yaml or .yml files.")
    )]
    UnsupportedFormat(String),
}

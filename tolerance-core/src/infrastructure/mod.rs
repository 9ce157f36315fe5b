// tolerance-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;

pub use config::{ErrorLimitConfig, JobConfig, load_job_config, load_snapshot};

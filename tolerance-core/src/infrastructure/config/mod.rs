// tolerance-core/src/infrastructure/config/mod.rs

pub mod job;
pub mod snapshot;

pub use job::{ErrorLimitConfig, JobConfig, apply_env_overrides, load_job_config};
pub use snapshot::load_snapshot;

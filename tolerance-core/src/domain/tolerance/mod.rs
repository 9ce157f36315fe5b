// tolerance-core/src/domain/tolerance/mod.rs

pub mod error;
pub mod policy;
pub mod snapshot;

// Re-exports
pub use error::{ConfigurationError, LimitExceededError, LimitKind};
pub use policy::{ErrorLimit, ErrorTolerancePolicy};
pub use snapshot::StatisticsSnapshot;

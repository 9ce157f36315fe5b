pub mod error;
pub mod ports;
pub mod tolerance;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
pub use tolerance::{ErrorLimit, ErrorTolerancePolicy, StatisticsSnapshot};

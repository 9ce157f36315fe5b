// tolerance-core/src/application/mod.rs

pub mod enforcement;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI peut faire `use tolerance_core::application::{ToleranceReport, evaluate_limits};`
// sans connaître la structure interne des fichiers.

pub use enforcement::{enforce_tolerance, evaluate_limits};
pub use report::{ToleranceReport, Violation};

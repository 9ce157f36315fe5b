// tolerance-core/src/error.rs

use crate::domain::error::DomainError;
use crate::domain::tolerance::{ConfigurationError, LimitExceededError};
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ToleranceError {
    // --- ERREURS DU DOMAINE (Limites, Configuration de la policy) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl ToleranceError {
    /// The violation behind this error, if the job tripped its limit.
    pub fn as_limit_exceeded(&self) -> Option<&LimitExceededError> {
        match self {
            Self::Domain(DomainError::LimitExceeded(err)) => Some(err),
            _ => None,
        }
    }
}

// Manual implementations to skip the DomainError hop at call sites
impl From<LimitExceededError> for ToleranceError {
    fn from(err: LimitExceededError) -> Self {
        ToleranceError::Domain(DomainError::LimitExceeded(err))
    }
}

impl From<ConfigurationError> for ToleranceError {
    fn from(err: ConfigurationError) -> Self {
        ToleranceError::Domain(DomainError::Configuration(err))
    }
}

impl From<std::io::Error> for ToleranceError {
    fn from(err: std::io::Error) -> Self {
        ToleranceError::Infrastructure(InfrastructureError::Io(err))
    }
}

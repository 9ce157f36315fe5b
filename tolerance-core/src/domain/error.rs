// tolerance-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::tolerance::{ConfigurationError, LimitExceededError};

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LimitExceeded(#[from] LimitExceededError),
}

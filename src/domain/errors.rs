// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures surfaced by the data layer. `Persistence` keeps the low-level
/// driver error as its source so diagnostics survive classification.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("persistence failure: {message}")]
    Persistence {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Closed set of failure kinds exposed past the service boundary.
///
/// `NotFound` and `EmptyResult` are expected, recoverable conditions; the
/// three operation failures are opaque data-access faults tagged by what the
/// service was doing when they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A by-identifier lookup matched zero rows.
    NotFound,
    /// A list query succeeded but yielded zero rows.
    EmptyResult,
    InsertFailed,
    SelectFailed,
    UpdateFailed,
    /// Input rejected before any data access.
    Validation,
}

/// A classified service failure: a kind plus a human-readable message.
/// The original data-layer error, when there is one, rides along as the
/// source chain for logs but is never matched on by callers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<DomainError>,
}

impl ServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorKind {
    /// Classify a data-layer failure under this kind, keeping it as the
    /// cause chain.
    pub fn wrap(self, source: DomainError, message: impl Into<String>) -> ServiceError {
        ServiceError {
            kind: self,
            message: message.into(),
            source: Some(source),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ServiceError::new(ErrorKind::Validation, msg),
            // Persistence failures are classified at the data-access call
            // site; one arriving here went through `?` unclassified.
            other @ DomainError::Persistence { .. } => {
                ErrorKind::SelectFailed.wrap(other, "unclassified data access failure")
            }
        }
    }
}

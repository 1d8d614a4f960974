use crate::domain::errors::DomainError;

/// Convert a driver error into the domain's persistence failure, keeping
/// the original error as the source chain.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let message = match &err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    };

    DomainError::Persistence {
        message,
        source: Box::new(err),
    }
}

//! Validation error types

use thiserror::Error;

/// Precondition failures raised by the data access layer before any SQL is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The connection pool is unusable (closed)
    #[error("db connection is nil")]
    MissingConnection,

    /// List window with a negative offset or limit
    #[error("user count and offset must be positive integers")]
    NegativeWindow { offset: i64, limit: i64 },
}

/// Reject list windows the database would refuse.
pub fn validate_window(offset: i64, limit: i64) -> Result<(), ValidationError> {
    if offset < 0 || limit < 0 {
        tracing::warn!(offset, limit, "rejected list window");
        return Err(ValidationError::NegativeWindow { offset, limit });
    }
    Ok(())
}

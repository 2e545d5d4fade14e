use thiserror::Error;

/// Errors raised by a table store operation.
///
/// These are faults, not business outcomes: a missing item is reported as
/// `Ok(None)` by the store, never as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request throttled: {0}")]
    Throttled(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

//! Error types for DynamoDB operations.

use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{unprocessed} items left unprocessed after retries ({inserted} inserted)")]
    UnprocessedItems { inserted: usize, unprocessed: usize },

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,
}

impl DynamodbError {
    /// Wraps any SDK or builder error.
    pub fn sdk(error: impl std::fmt::Display) -> Self {
        Self::AwsSdk(error.to_string())
    }
}

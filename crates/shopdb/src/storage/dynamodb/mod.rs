//! DynamoDB storage backend.
//!
//! Implements the table store using `aws-sdk-dynamodb`. The table itself is
//! provisioned by `cargo xtask dynamodb deploy`.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;

//! shopdb_client - CLI client for the shopdb API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ShopdbClient;
pub use error::{ClientError, Result};

//! Application state.
//!
//! Holds the dispatcher shared by every request handler. The store backend
//! behind it is chosen at compile time via feature flags.

use std::sync::Arc;

use shopdb_core::storage::TableStore;

use crate::config::Config;
use crate::dispatch::Dispatcher;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Creates an AppState dispatching onto the given store.
    pub fn with_store(store: Arc<dyn TableStore>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(store)),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage");
            Ok(Self::with_store(Arc::new(InMemoryStore::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = DynamoDbStore::from_config(config).await;
            tracing::info!(
                table = store.table_name(),
                endpoint = config.endpoint_url.as_deref().unwrap_or("aws"),
                "Using DynamoDB storage"
            );
            Ok(Self::with_store(Arc::new(store)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::dispatch::test_support::RecordingStore;

    impl Default for AppState {
        fn default() -> Self {
            Self::with_store(Arc::new(RecordingStore::new()))
        }
    }
}

//! In-memory storage backend.
//!
//! Keeps every item in an ordered map wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted, which makes it the backend for local development and tests.

mod store;

pub use store::InMemoryStore;

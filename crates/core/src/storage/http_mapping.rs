//! Pure functions for mapping store errors to HTTP status codes.
//!
//! Store errors are faults of the serving layer, so they always map to the
//! 5xx range and never collide with the 400/404 business outcomes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Throttled` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use shopdb_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::Throttled("slow down".to_string());
/// assert_eq!(store_error_to_status_code(&error), 503);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::ConnectionFailed(_) => 503,
        StoreError::Throttled(_) => 503,
        StoreError::QueryFailed(_) => 500,
        StoreError::InvalidData(_) => 500,
    }
}

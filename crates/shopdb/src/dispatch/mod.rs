//! Request dispatcher.
//!
//! Resolves an [`ApiRequest`] onto a [`Route`], runs the existence checks the
//! route requires and performs at most one write. Business outcomes (NotFound,
//! BadRequest) are returned as an [`ApiResponse`]; store faults propagate as
//! `Err(StoreError)` without being retried.

mod orders;
#[cfg(test)]
pub(crate) mod test_support;
mod users;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shopdb_core::routing::{ApiRequest, ApiResponse, Route, BAD_REQUEST_MESSAGE};
use shopdb_core::storage::{Result, TableStore};

/// Routes requests onto the single table.
///
/// Holds nothing but the injected store handle, so one instance is shared by
/// every request.
pub struct Dispatcher {
    store: Arc<dyn TableStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Executes exactly one action for the request.
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let route = match request.route() {
            Ok(route) => route,
            Err(err) => {
                tracing::warn!(
                    resource = %request.resource,
                    method = %request.method,
                    error = %err,
                    "Unmatched request"
                );
                return Ok(ApiResponse::bad_request(BAD_REQUEST_MESSAGE));
            }
        };

        tracing::debug!(?route, mutation = route.is_mutation(), "Dispatching request");

        let store = self.store.as_ref();
        let result = match route {
            Route::User(action) => users::handle(store, action, request).await,
            Route::Order { username, action } => {
                orders::handle(store, &username, action, request).await
            }
        };

        match &result {
            Ok(response) if response.is_success() => {
                tracing::info!(status = response.status_code, "Request handled");
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status_code,
                    body = %response.body,
                    "Request rejected"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "Store operation failed");
            }
        }

        result
    }
}

/// Parses the request body, or renders the 400 to return instead.
fn parse_body<T: DeserializeOwned>(request: &ApiRequest) -> std::result::Result<T, ApiResponse> {
    request
        .json_body()
        .map_err(|reason| ApiResponse::bad_request(format!("Invalid request body: {reason}")))
}

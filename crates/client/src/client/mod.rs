//! HTTP client for the shopdb API.

pub mod orders;
pub mod users;

use crate::error::{ClientError, Result};

/// HTTP client for the shopdb API.
#[derive(Debug, Clone)]
pub struct ShopdbClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShopdbClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (SHOPDB_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SHOPDB_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL from path segments, percent-encoding each one.
    ///
    /// Usernames, ids and statuses are free-form, so a `/` or `#` inside them
    /// must not change the path shape.
    fn url(&self, segments: &[&str]) -> String {
        segments.iter().fold(self.base_url.clone(), |mut url, segment| {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
            url
        })
    }

    /// Decode a successful response, or turn an error status into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_for_status(status, &text))
    }
}

/// Maps an error status and its body onto a `ClientError`.
///
/// The server renders messages as JSON strings; anything else is kept verbatim.
pub(crate) fn error_for_status(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<String>(body).unwrap_or_else(|_| body.to_string());
    match status {
        404 => ClientError::NotFound { message },
        400 => ClientError::BadRequest { message },
        status => ClientError::ServerError { status, message },
    }
}

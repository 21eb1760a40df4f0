//! Remote document store client - infrastructure layer
//!
//! Admin-curated content lives in a hosted key-value document store; every
//! document is fetched as `{base_url}/{key}.json`. Callers treat every kind
//! of failure as a miss and fall back, so this client only distinguishes
//! "document present" from everything else.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Remote document store client
pub struct StoreClient {
    http: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.store_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.store_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one document by key.
    ///
    /// Missing documents come back as JSON `null` from the store; both that
    /// and non-success statuses are `Ok(None)`. Transport failures surface
    /// as `AppError::Store` so callers can log them before falling back.
    pub async fn fetch_document(&self, key: &str) -> Result<Option<Value>> {
        let url = self.document_url(key);
        debug!("store lookup: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Store {
                key: key.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            warn!("store returned {} for key {}", response.status(), key);
            return Ok(None);
        }

        let value: Value = response.json().await.map_err(|e| AppError::Store {
            key: key.to_string(),
            source: e,
        })?;

        if value.is_null() {
            return Ok(None);
        }

        Ok(Some(value))
    }

    fn document_url(&self, key: &str) -> String {
        format!("{}/{}.json", self.base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> StoreClient {
        let config = Config {
            store_base_url: base.to_string(),
            ..Config::default()
        };
        StoreClient::new(&config)
    }

    #[test]
    fn document_url_format() {
        let client = test_client("https://example.com/content");
        assert_eq!(
            client.document_url("nst_content_CBSE_10_Science_static-1"),
            "https://example.com/content/nst_content_CBSE_10_Science_static-1.json"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = test_client("https://example.com/content/");
        assert_eq!(client.document_url("k"), "https://example.com/content/k.json");
    }

    #[test]
    fn unreachable_store_is_a_store_error() {
        // Port 9 is not listening; the transport failure must surface as
        // Store so callers can log it before falling back.
        let client = test_client("http://127.0.0.1:9");
        let result = tokio_test::block_on(client.fetch_document("k"));
        assert!(matches!(result, Err(AppError::Store { .. })));
    }
}

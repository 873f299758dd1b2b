//! HTTP client for the external store feed.

use std::time::Duration;

use reqwest::Client;

use pcmap_core::StoreRecord;

use crate::decode::parse_stores;
use crate::error::FeedError;

/// HTTP client wrapping the single startup feed fetch.
///
/// Deliberately has no retry, polling, or caching: the directory makes
/// exactly one attempt per process start and falls back to its seed data on
/// any failure. A hung request is bounded only by the configured timeout.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches and decodes the store feed.
    ///
    /// An empty vec is a valid success (feed reachable but no data rows);
    /// the caller decides whether to act on it. Per-field decode problems
    /// never surface here — they become the documented field defaults.
    ///
    /// # Errors
    ///
    /// - [`FeedError::HttpStatus`] — any non-2xx response.
    /// - [`FeedError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch_stores(&self, url: &str) -> Result<Vec<StoreRecord>, FeedError> {
        tracing::debug!(url, "fetching store feed");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let stores = parse_stores(&body);
        tracing::info!(url, rows = stores.len(), "store feed fetched");
        Ok(stores)
    }
}

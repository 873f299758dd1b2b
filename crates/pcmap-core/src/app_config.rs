//! Application configuration shape.

/// Runtime configuration, loaded from env vars by [`crate::config`].
///
/// Every field has a default; the application runs with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the external store feed (comma-separated text, UTF-8).
    pub feed_url: String,
    /// Whole-request timeout for the single startup fetch.
    pub request_timeout_secs: u64,
    /// `User-Agent` sent with the feed request.
    pub user_agent: String,
    /// Default tracing filter, overridable via `RUST_LOG`.
    pub log_level: String,
}

impl AppConfig {
    pub const DEFAULT_FEED_URL: &str = "https://pcmap.kr/stores.csv";
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_USER_AGENT: &str = "pcmap/0.1";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

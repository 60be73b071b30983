//! Shared HTTP client for the metadata and search endpoints.
//!
//! One pooled `reqwest` client is built per resolver and reused across all
//! outbound calls:
//! - Connection pooling with keep-alive
//! - Brotli/Zstd/Gzip decompression (auto-negotiated)
//! - rustls TLS
//! - Transport-level connect and request timeouts

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::Error;

/// Descriptive User-Agent; Reddit throttles generic library defaults.
const USER_AGENT: &str = concat!("threadlink/", env!("CARGO_PKG_VERSION"));

/// Pooled HTTP client shared by all outbound fetches.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new pooled client.
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .brotli(true)
            .zstd(true)
            .gzip(true)
            .deflate(true)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    /// Issue a GET and return the body as text, treating non-2xx as an error.
    pub async fn fetch_text(&self, url: &str) -> Result<String, reqwest::Error> {
        debug!(%url, "fetching");
        let response = self.client.get(url).send().await?.error_for_status()?;

        debug!(
            status = %response.status(),
            version = ?response.version(),
            "response received"
        );

        response.text().await
    }

    /// Get the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

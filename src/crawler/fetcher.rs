//! HTTP fetcher implementation
//!
//! This module handles all page requests, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests in strict mode (non-2xx is an error)
//! - Fixed-delay retry for any failed attempt

use crate::config::Config;
use crate::GleanError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Raw response of a successful fetch
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code
    pub status_code: u16,
    /// Page body bytes
    pub body: Vec<u8>,
    /// Final URL after redirects
    pub final_url: String,
    /// Content-Type header value, if any
    pub content_type: Option<String>,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```
/// use gleaner::config::Config;
/// use gleaner::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// GET with bounded, fixed-delay retry
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    retry_delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher that waits `retry_delay` between attempts
    pub fn new(client: Client, retry_delay: Duration) -> Self {
        Self {
            client,
            retry_delay,
        }
    }

    /// Fetches `url`, retrying up to `max_retries` times
    ///
    /// # Retry Logic
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | 2xx | Return the response |
    /// | Non-2xx status | Retry after the fixed delay |
    /// | Timeout, connection or body read error | Retry after the fixed delay |
    /// | Retries exhausted | `GleanError::Network` |
    ///
    /// At most `max_retries + 1` requests are sent.
    pub async fn get(&self, url: &Url, max_retries: u32) -> Result<FetchResult, GleanError> {
        let mut retries_left = max_retries;
        let mut attempts = 0;

        loop {
            attempts += 1;
            tracing::debug!("GET {} (attempt {})", url, attempts);

            match self.attempt(url).await {
                Ok(result) => return Ok(result),
                Err(e) if retries_left > 0 => {
                    tracing::warn!(
                        "Request to {} failed: {}; retrying in {:?} ({} left)",
                        url,
                        e,
                        self.retry_delay,
                        retries_left
                    );
                    retries_left -= 1;
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => {
                    tracing::error!("Request to {} failed after {} attempt(s): {}", url, attempts, e);
                    return Err(GleanError::Network {
                        url: url.to_string(),
                        attempts,
                        source: e,
                    });
                }
            }
        }
    }

    /// Sends a single GET and reads the whole body
    async fn attempt(&self, url: &Url) -> Result<FetchResult, reqwest::Error> {
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?.to_vec();

        Ok(FetchResult {
            status_code,
            body,
            final_url,
            content_type,
        })
    }
}

//! HTTP fetcher
//!
//! One client is built per run and reused for every request. Fetching is
//! deliberately tolerant: any transport or HTTP-status failure is logged
//! and surfaces to the caller as "no content", never as an error. There is
//! no retry and no caching; a failed URL stays failed for this run.

use reqwest::Client;
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("fairway-scout/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for the whole crawl
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body, or `None` on any failure
///
/// Failures covered: connection errors, timeouts, non-2xx status codes,
/// and body-read errors. Each is logged at warn level with the URL; the
/// caller treats `None` as an empty extraction.
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("error fetching {}: {}", url, e);
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("error fetching {}: HTTP {}", url, status.as_u16());
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("error reading body of {}: {}", url, e);
            None
        }
    }
}

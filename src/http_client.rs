//! Shared HTTP client construction policy.
//!
//! Both the version API client and the file downloader are built here so they
//! agree on timeouts, user-agent and compression.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

/// Default connect timeout for version API requests.
pub const API_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total request timeout for version API requests.
pub const API_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for file downloads.
pub const DOWNLOAD_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default total request timeout for file downloads (5 minutes for large files).
pub const DOWNLOAD_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Connect and total-request timeouts for one HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    /// Limit on establishing the TCP/TLS connection.
    pub connect_secs: u64,
    /// Limit on the whole request, body included.
    pub request_secs: u64,
}

impl HttpTimeouts {
    /// Timeouts used for version API lookups.
    #[must_use]
    pub const fn api() -> Self {
        Self {
            connect_secs: API_CONNECT_TIMEOUT_SECS,
            request_secs: API_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Timeouts used for file downloads.
    #[must_use]
    pub const fn download() -> Self {
        Self {
            connect_secs: DOWNLOAD_CONNECT_TIMEOUT_SECS,
            request_secs: DOWNLOAD_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Builds an HTTP client carrying the tool's User-Agent and the given timeouts.
///
/// # Errors
///
/// Returns the underlying reqwest error if the client cannot be constructed
/// (for example when the TLS backend fails to initialize).
pub fn build_http_client(timeouts: HttpTimeouts) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.request_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
        .build()
}

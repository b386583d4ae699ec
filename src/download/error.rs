//! Failures while fetching a resolved mod file.

use std::path::PathBuf;

use thiserror::Error;

/// Why a mod file did not reach disk.
///
/// None of these stop a run; the driver logs them and records the mod under
/// failed downloads.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The file host could not be reached or the body stream broke off.
    #[error("could not fetch mod file {url}: {source}")]
    Network {
        /// File URL from the version record.
        url: String,
        /// Transport error reported by reqwest.
        #[source]
        source: reqwest::Error,
    },

    /// The fetch exceeded the configured download timeout.
    #[error("mod file fetch timed out: {url}\n  Suggestion: Raise --download-timeout for large files or slow mirrors")]
    Timeout {
        /// File URL from the version record.
        url: String,
    },

    /// The file host answered with a non-success status.
    #[error("file host returned HTTP {status} for {url}")]
    HttpStatus {
        /// File URL from the version record.
        url: String,
        /// Status code of the response.
        status: u16,
    },

    /// Creating or writing the local jar failed.
    #[error("could not write mod file {path}: {source}\n  Suggestion: Check that the output directory is writable")]
    Io {
        /// Local destination of the jar.
        path: PathBuf,
        /// Filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The version record carried a file URL that does not parse.
    #[error("version record has an unusable file URL: {url}")]
    InvalidUrl {
        /// The URL as returned by the API.
        url: String,
    },

    /// The download client could not be built.
    #[error("could not set up the download client: {source}")]
    ClientBuild {
        /// Builder error from reqwest.
        #[source]
        source: reqwest::Error,
    },
}

impl DownloadError {
    /// Creates a network error from a reqwest error, promoting timeouts.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Self::timeout(url);
        }
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

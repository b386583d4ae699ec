//! HTTP client wrapper for downloading mod files.
//!
//! This module provides the `HttpClient` struct which streams a response body
//! to a named file with proper timeout configuration and error handling.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::error::DownloadError;
use super::filename::target_filename;
use crate::http_client::{HttpTimeouts, build_http_client};

/// HTTP client for downloading files with streaming support.
///
/// Created once per run and reused for every download, taking advantage of
/// connection pooling.
///
/// # Example
///
/// ```no_run
/// use mod_downloader_core::download::HttpClient;
/// use mod_downloader_core::http_client::HttpTimeouts;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new(HttpTimeouts::download())?;
/// let path = client
///     .download_to_file("https://cdn.modrinth.com/data/x/sodium.jar", Path::new("./downloads"), "sodium.jar")
///     .await?;
/// println!("Downloaded to: {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::ClientBuild`] if the client cannot be built.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, DownloadError> {
        let client =
            build_http_client(timeouts).map_err(|source| DownloadError::ClientBuild { source })?;
        Ok(Self { client })
    }

    /// Downloads `url` to `output_dir/filename`, overwriting any existing file.
    ///
    /// The body is streamed to disk chunk by chunk, so large files are never
    /// held in memory. If streaming fails the partial file is removed.
    ///
    /// # Returns
    ///
    /// The path to the downloaded file.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (network error, timeout)
    /// - The server returns an error status (4xx, 5xx)
    /// - Writing to disk fails
    #[must_use = "download result contains the path to the downloaded file"]
    #[instrument(skip(self, output_dir), fields(url = %url))]
    pub async fn download_to_file(
        &self,
        url: &str,
        output_dir: &Path,
        filename: &str,
    ) -> Result<PathBuf, DownloadError> {
        let parsed_url =
            Url::parse(url).map_err(|_| DownloadError::invalid_url(url.to_string()))?;
        let file_path = output_dir.join(target_filename(filename, &parsed_url));
        debug!(path = %file_path.display(), "resolved output path");

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let mut file = File::create(&file_path)
            .await
            .map_err(|e| DownloadError::io(file_path.clone(), e))?;

        let stream_result = stream_to_file(&mut file, response, url, &file_path).await;
        if stream_result.is_err() {
            debug!(path = %file_path.display(), "cleaning up partial file after error");
            drop(file);
            let _ = tokio::fs::remove_file(&file_path).await;
        }
        let bytes_written = stream_result?;

        info!(path = %file_path.display(), bytes = bytes_written, "download complete");
        Ok(file_path)
    }
}

/// Streams response body to file, returning bytes written.
///
/// This is extracted to enable cleanup on error in the caller.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}

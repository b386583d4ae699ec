//! Version resolution: from a project slug to one downloadable file.
//!
//! # Architecture
//!
//! - [`VersionSource`] - Async trait the reconciliation driver resolves through
//! - [`ModrinthResolver`] - Implementation backed by the Modrinth v2 API
//! - [`select_first_file`] - The selection rule applied to a version list
//! - [`ResolveError`] - Why a lookup produced no file
//!
//! # Example
//!
//! ```no_run
//! use mod_downloader_core::http_client::HttpTimeouts;
//! use mod_downloader_core::resolver::{ModrinthResolver, VersionSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ModrinthResolver::new(HttpTimeouts::api())?;
//! let file = resolver.resolve("sodium", "fabric", Some("1.21.10")).await?;
//! println!("{} -> {}", file.filename, file.url);
//! # Ok(())
//! # }
//! ```

mod error;
mod modrinth;

pub use error::ResolveError;
pub use modrinth::{DEFAULT_API_BASE_URL, ModrinthResolver};

use async_trait::async_trait;
use serde::Deserialize;

/// A downloadable file as listed by the version API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    /// Direct download URL.
    pub url: String,
    /// Name to save the file under.
    pub filename: String,
}

/// One version entry from the version API. Fields other than these are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionRecord {
    /// Opaque version id assigned by the API.
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable version string, e.g. `mc1.21.10-0.6.0`.
    #[serde(default)]
    pub version_number: Option<String>,
    /// Downloadable files; only the first one is used.
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

impl VersionRecord {
    fn label(&self) -> &str {
        self.version_number
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("<unknown>")
    }
}

/// Picks the file to download from a version list.
///
/// The rule is: first version record, then its first file. This relies on the
/// API returning versions newest first and listing the primary file first;
/// neither ordering is verified here.
///
/// # Errors
///
/// Returns [`ResolveError::NoVersions`] for an empty list and
/// [`ResolveError::NoFiles`] when the first record has no files.
pub fn select_first_file(
    slug: &str,
    loader: &str,
    game_version: Option<&str>,
    versions: Vec<VersionRecord>,
) -> Result<FileDescriptor, ResolveError> {
    let Some(first) = versions.into_iter().next() else {
        return Err(ResolveError::no_versions(slug, loader, game_version));
    };
    let label = first.label().to_string();
    first
        .files
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::no_files(slug, &label))
}

/// Source of downloadable files for a project.
///
/// Implementations never panic on remote failures; every failure is returned
/// as a [`ResolveError`] so callers can fall back or classify.
///
/// # Object Safety
///
/// This trait uses `async_trait` so the driver can hold a `&dyn VersionSource`.
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Resolves `slug` for `loader`, restricted to `game_version` when given.
    ///
    /// `loader` is case-folded by the implementation.
    async fn resolve(
        &self,
        slug: &str,
        loader: &str,
        game_version: Option<&str>,
    ) -> Result<FileDescriptor, ResolveError>;
}

//! Reconciliation driver: walks the manifest and brings each mod to disk.
//!
//! Every processed entry ends in exactly one [`ModOutcome`]:
//!
//! 1. URL missing or not on the supported host: `Skipped`, no network call.
//! 2. Slug cannot be extracted: `Missing`, no network call.
//! 3. Strict lookup (loader + game version) succeeds: fetched to the output
//!    dir, `Matched`.
//! 4. Otherwise a fallback lookup (loader only) succeeds: fetched to the
//!    fallback dir, `Fallback`.
//! 5. Otherwise `Missing`.
//!
//! Entries are processed one at a time in manifest order; each entry's
//! lookups and fetch complete before the next entry starts.

mod report;

pub use report::ReconcileReport;

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::config::RunConfig;
use crate::download::HttpClient;
use crate::manifest::{Manifest, ModEntry};
use crate::parser::{SlugError, extract_project_slug, references_supported_host};
use crate::resolver::{FileDescriptor, ResolveError, VersionSource};

/// Errors preparing the output directory tree. These are fatal to a run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Directory could not be created
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        /// The directory path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be removed for a clean run
    #[error("could not clean directory {path}: {source}")]
    CleanDir {
        /// The directory path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Refused to clean a path that is not a named directory
    #[error("refusing to clean '{path}'\n  Suggestion: Point --output-dir at a dedicated downloads directory")]
    UnsafeCleanTarget {
        /// The rejected path
        path: PathBuf,
    },
}

/// A resolved file and where it ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// File chosen by the resolver.
    pub descriptor: FileDescriptor,
    /// Written path, or `None` when the fetch failed.
    pub path: Option<PathBuf>,
}

/// Why an entry could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// The URL path did not yield a project slug.
    UnparseableUrl(SlugError),
    /// Both the strict and the fallback lookup failed.
    Unresolved {
        /// Failure of the loader + game version lookup.
        strict: ResolveError,
        /// Failure of the loader-only lookup.
        fallback: ResolveError,
    },
}

/// Final state of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModOutcome {
    /// Not a supported-host entry; not counted anywhere.
    Skipped,
    /// Strict match found and fetched to the output dir.
    Matched(FetchedFile),
    /// Only a non-matching version found; fetched to the fallback dir.
    Fallback {
        /// File fetched by the loader-only lookup.
        fetched: FetchedFile,
        /// Why the strict lookup came up empty.
        strict_error: ResolveError,
    },
    /// Nothing to download.
    Missing(MissingReason),
}

/// Creates the output and fallback directories.
///
/// With `config.clean`, the output directory is removed first so the run
/// starts from an empty tree.
///
/// # Errors
///
/// Returns [`ReconcileError`] when a directory cannot be removed or created,
/// or when `clean` targets a path without a named final component.
pub fn prepare_directories(config: &RunConfig) -> Result<(), ReconcileError> {
    if config.clean && config.output_dir.exists() {
        if !is_cleanable(&config.output_dir) {
            return Err(ReconcileError::UnsafeCleanTarget {
                path: config.output_dir.clone(),
            });
        }
        info!(dir = %config.output_dir.display(), "Cleaning old files");
        std::fs::remove_dir_all(&config.output_dir).map_err(|source| {
            ReconcileError::CleanDir {
                path: config.output_dir.clone(),
                source,
            }
        })?;
    }

    for dir in [&config.output_dir, &config.fallback_dir] {
        std::fs::create_dir_all(dir).map_err(|source| ReconcileError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}

fn is_cleanable(path: &Path) -> bool {
    matches!(path.components().next_back(), Some(Component::Normal(_)))
}

/// Drives one reconciliation run over a manifest.
pub struct Reconciler<'a> {
    config: &'a RunConfig,
    source: &'a dyn VersionSource,
    fetcher: &'a HttpClient,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub fn new(
        config: &'a RunConfig,
        source: &'a dyn VersionSource,
        fetcher: &'a HttpClient,
    ) -> Self {
        Self {
            config,
            source,
            fetcher,
        }
    }

    /// Processes every entry of `manifest` and returns the accumulated report.
    ///
    /// The loader is chosen once from the manifest settings and applies to
    /// every lookup. Per-mod failures are recorded, never returned.
    #[instrument(skip_all, fields(game_version = %self.config.game_version))]
    pub async fn run(&self, manifest: &Manifest) -> ReconcileReport {
        let loader = manifest.loader(&self.config.default_loader);
        info!(
            loader,
            game_version = %self.config.game_version,
            mods = manifest.mod_count(),
            "Starting download process"
        );

        let mut report = ReconcileReport::default();
        for category in &manifest.mod_categories {
            info!(category = category.display_title(), "Processing category");
            for entry in &category.mods {
                let outcome = self.process_entry(entry, loader).await;
                report.record(entry.display_name(), &outcome);
            }
        }

        debug!(
            processed = report.processed(),
            matched = report.matched.len(),
            fallback = report.fallback.len(),
            missing = report.missing.len(),
            skipped = report.skipped,
            "Reconciliation finished"
        );
        report
    }

    /// Resolves and fetches a single manifest entry.
    #[instrument(skip_all, fields(mod_name = %entry.display_name()))]
    pub async fn process_entry(&self, entry: &ModEntry, loader: &str) -> ModOutcome {
        let name = entry.display_name();
        let Some(url) = entry
            .url
            .as_deref()
            .filter(|url| references_supported_host(url, &self.config.supported_host))
        else {
            debug!("Skipping entry without a supported URL");
            return ModOutcome::Skipped;
        };

        let slug = match extract_project_slug(url) {
            Ok(slug) => slug,
            Err(e) => {
                warn!(url, error = %e, "Could not parse URL for {name}");
                return ModOutcome::Missing(MissingReason::UnparseableUrl(e));
            }
        };

        let strict_error = match self
            .source
            .resolve(&slug, loader, Some(&self.config.game_version))
            .await
        {
            Ok(descriptor) => {
                let fetched = self.fetch(descriptor, &self.config.output_dir).await;
                return ModOutcome::Matched(fetched);
            }
            Err(e) => e,
        };

        info!(
            slug = %slug,
            reason = %strict_error,
            "No strict match for '{name}'. Checking for any version"
        );
        match self.source.resolve(&slug, loader, None).await {
            Ok(descriptor) => {
                info!(
                    dir = %self.config.fallback_dir.display(),
                    "Found older/newer version of '{name}', saving to fallback dir"
                );
                let fetched = self.fetch(descriptor, &self.config.fallback_dir).await;
                ModOutcome::Fallback {
                    fetched,
                    strict_error,
                }
            }
            Err(fallback_error) => {
                if fallback_error.is_terminal() {
                    error!(slug = %slug, url, "CRITICAL: '{name}' does not exist on Modrinth, check the manifest URL");
                } else {
                    warn!(slug = %slug, reason = %fallback_error, "FAIL: No versions found for '{name}' at all");
                }
                ModOutcome::Missing(MissingReason::Unresolved {
                    strict: strict_error,
                    fallback: fallback_error,
                })
            }
        }
    }

    async fn fetch(&self, descriptor: FileDescriptor, dir: &Path) -> FetchedFile {
        info!(filename = %descriptor.filename, "Downloading {}", descriptor.filename);
        let path = match self
            .fetcher
            .download_to_file(&descriptor.url, dir, &descriptor.filename)
            .await
        {
            Ok(path) => Some(path),
            Err(e) => {
                error!(filename = %descriptor.filename, error = %e, "Failed to download {}", descriptor.filename);
                None
            }
        };
        FetchedFile { descriptor, path }
    }
}

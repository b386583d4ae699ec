//! Mod Downloader Core Library
//!
//! This library reconciles a curated mod manifest against Modrinth: each mod
//! is resolved for the target loader and game version, falling back to the
//! latest available version, and its file is downloaded.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`manifest`] - Manifest model, loading and loader selection
//! - [`parser`] - Mod URL host check and project slug extraction
//! - [`resolver`] - Version lookup against the Modrinth API
//! - [`download`] - Streaming file downloads
//! - [`reconcile`] - The per-mod strict/fallback/missing driver
//! - [`config`] - Run configuration and validation
//! - [`output`] - End-of-run summary formatting

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod http_client;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod reconcile;
pub mod resolver;
mod user_agent;

// Re-export commonly used types
pub use config::{ConfigError, RunConfig};
pub use download::{DownloadError, HttpClient};
pub use http_client::HttpTimeouts;
pub use manifest::{Manifest, ManifestError};
pub use parser::{SlugError, extract_project_slug};
pub use reconcile::{ModOutcome, ReconcileError, ReconcileReport, Reconciler, prepare_directories};
pub use resolver::{FileDescriptor, ModrinthResolver, ResolveError, VersionSource};

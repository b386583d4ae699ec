//! File fetching for resolved mod files.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large files)
//! - Named output files, overwritten on each run
//! - Filename sanitization for names supplied by the remote API
//! - Structured error types with full context

mod client;
mod error;
mod filename;

pub use client::HttpClient;
pub use error::DownloadError;

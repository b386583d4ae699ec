//! Mod URL parsing.
//!
//! Manifest entries reference mods by their project page URL. This module
//! decides whether an entry belongs to the supported host and extracts the
//! project slug the version API expects.

mod error;
mod slug;

pub use error::SlugError;
pub use slug::{SUPPORTED_HOST, extract_project_slug, references_supported_host};

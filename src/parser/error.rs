//! Error types for mod URL parsing.

use thiserror::Error;

/// Errors that can occur while extracting a project slug from a mod URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// URL has a scheme but could not be parsed
    #[error("invalid URL '{url}': {reason}\n  Suggestion: Check the URL format in the manifest")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Why parsing failed
        reason: String,
    },

    /// URL path does not have enough segments to contain a project slug
    #[error(
        "URL '{url}' has {segments} path segment(s), expected at least 2\n  Suggestion: Use a project URL such as https://modrinth.com/mod/<slug>"
    )]
    TooFewSegments {
        /// The URL without a usable path
        url: String,
        /// Number of non-empty path segments found
        segments: usize,
    },
}

impl SlugError {
    /// Creates an `InvalidUrl` error.
    #[must_use]
    pub fn invalid_url(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `TooFewSegments` error.
    #[must_use]
    pub fn too_few_segments(url: &str, segments: usize) -> Self {
        Self::TooFewSegments {
            url: url.to_string(),
            segments,
        }
    }
}

//! Error types for version resolution.
//!
//! Every failure the version API can produce is a value of [`ResolveError`];
//! the reconciliation driver branches on it instead of on an absent result.

use thiserror::Error;

/// Errors that can occur while resolving a project to a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The API returned 404: the slug does not name a project
    #[error("project '{slug}' does not exist on Modrinth\n  Suggestion: Check the mod URL in the manifest")]
    ProjectNotFound {
        /// The slug that was looked up
        slug: String,
    },

    /// The API returned a non-success status other than 404
    #[error("version API returned HTTP {status} for '{slug}'")]
    HttpStatus {
        /// The slug that was looked up
        slug: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request did not complete (DNS, connection, timeout, TLS)
    #[error("version API request failed for '{slug}': {reason}")]
    Network {
        /// The slug that was looked up
        slug: String,
        /// Transport error description
        reason: String,
    },

    /// The response body did not have the expected shape
    #[error("malformed version API response for '{slug}': {reason}")]
    MalformedResponse {
        /// The slug that was looked up
        slug: String,
        /// Decoding error description
        reason: String,
    },

    /// The API returned an empty version list for the query
    #[error("no versions of '{slug}' for loader '{loader}'{}", game_version_suffix(.game_version))]
    NoVersions {
        /// The slug that was looked up
        slug: String,
        /// Loader filter that was applied
        loader: String,
        /// Game version filter, if one was applied
        game_version: Option<String>,
    },

    /// The selected version record lists no files
    #[error("version '{version}' of '{slug}' has no files")]
    NoFiles {
        /// The slug that was looked up
        slug: String,
        /// Identifier or number of the empty version
        version: String,
    },

    /// The API base URL or request URL could not be built
    #[error("invalid version API URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Why parsing failed
        reason: String,
    },

    /// The HTTP client could not be constructed
    #[error("HTTP client construction failed: {reason}")]
    ClientBuild {
        /// Builder error description
        reason: String,
    },
}

#[allow(clippy::ref_option)]
fn game_version_suffix(game_version: &Option<String>) -> String {
    game_version
        .as_deref()
        .map_or_else(String::new, |v| format!(" on {v}"))
}

impl ResolveError {
    /// Creates a `ProjectNotFound` error.
    #[must_use]
    pub fn project_not_found(slug: &str) -> Self {
        Self::ProjectNotFound {
            slug: slug.to_string(),
        }
    }

    /// Creates an `HttpStatus` error.
    #[must_use]
    pub fn http_status(slug: &str, status: u16) -> Self {
        Self::HttpStatus {
            slug: slug.to_string(),
            status,
        }
    }

    /// Creates a `Network` error.
    #[must_use]
    pub fn network(slug: &str, reason: impl std::fmt::Display) -> Self {
        Self::Network {
            slug: slug.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `MalformedResponse` error.
    #[must_use]
    pub fn malformed(slug: &str, reason: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            slug: slug.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `NoVersions` error.
    #[must_use]
    pub fn no_versions(slug: &str, loader: &str, game_version: Option<&str>) -> Self {
        Self::NoVersions {
            slug: slug.to_string(),
            loader: loader.to_string(),
            game_version: game_version.map(str::to_string),
        }
    }

    /// Creates a `NoFiles` error.
    #[must_use]
    pub fn no_files(slug: &str, version: &str) -> Self {
        Self::NoFiles {
            slug: slug.to_string(),
            version: version.to_string(),
        }
    }

    /// Creates an `InvalidUrl` error.
    #[must_use]
    pub fn invalid_url(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a `ClientBuild` error.
    #[must_use]
    pub fn client_build(reason: impl std::fmt::Display) -> Self {
        Self::ClientBuild {
            reason: reason.to_string(),
        }
    }

    /// Returns true when the project itself does not exist, as opposed to
    /// having no file matching the query.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ProjectNotFound { .. })
    }
}

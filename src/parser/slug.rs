//! Project slug extraction from mod page URLs.

use tracing::trace;
use url::{ParseError as UrlParseError, Url};

use super::error::SlugError;

/// Host that mod URLs must reference to be processed.
pub const SUPPORTED_HOST: &str = "modrinth.com";

/// Returns true when `url` references `host`.
///
/// This is a substring check on the raw string, so scheme-less entries such as
/// `modrinth.com/mod/sodium` are accepted as well.
#[must_use]
pub fn references_supported_host(url: &str, host: &str) -> bool {
    !host.is_empty() && url.contains(host)
}

/// Extracts the project slug from a mod page URL.
///
/// The path is stripped of leading and trailing `/` and split into segments.
/// With at least two segments the final one is the slug, so
/// `https://modrinth.com/mod/sodium` yields `sodium`.
///
/// URLs without a scheme are treated as a bare path (query and fragment
/// removed), which matches how a plain path split sees them.
///
/// # Errors
///
/// Returns [`SlugError::TooFewSegments`] when the path has fewer than two
/// segments, and [`SlugError::InvalidUrl`] when a URL with a scheme fails to parse.
///
/// # Examples
///
/// ```
/// use mod_downloader_core::parser::extract_project_slug;
///
/// assert_eq!(extract_project_slug("https://modrinth.com/mod/sodium").unwrap(), "sodium");
/// assert!(extract_project_slug("https://modrinth.com/").is_err());
/// ```
pub fn extract_project_slug(url: &str) -> Result<String, SlugError> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(UrlParseError::RelativeUrlWithoutBase) => strip_query_and_fragment(url).to_string(),
        Err(error) => return Err(SlugError::invalid_url(url, error)),
    };

    let trimmed = path.trim_matches('/');
    let segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    };

    if segments.len() < 2 {
        return Err(SlugError::too_few_segments(url, segments.len()));
    }

    let last = segments[segments.len() - 1];
    let slug = urlencoding::decode(last).map_or_else(|_| last.to_string(), |s| s.into_owned());
    trace!(url, slug = %slug, "extracted project slug");
    Ok(slug)
}

fn strip_query_and_fragment(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

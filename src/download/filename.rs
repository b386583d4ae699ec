//! Filename sanitization for downloaded mod files.
//!
//! Filenames come from the version API, so they are treated as untrusted and
//! reduced to a single path component before being joined to an output dir.

use std::path::{Component, Path};

use url::Url;

/// Sanitizes a filename for safe filesystem use.
///
/// Replaces path separators, reserved characters and control characters with
/// `_`. Names that still resolve to `.`/`..` have their dots replaced too.
#[must_use]
pub(crate) fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return "_".to_string();
    }

    if is_safe_filename_segment(&sanitized) {
        sanitized
    } else {
        sanitized
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect()
    }
}

fn is_safe_filename_segment(name: &str) -> bool {
    !Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Picks the on-disk name for a download.
///
/// Uses the remote filename when it is non-blank, otherwise the last segment
/// of the download URL.
#[must_use]
pub(crate) fn target_filename(remote_filename: &str, url: &Url) -> String {
    if !remote_filename.trim().is_empty() {
        return sanitize_filename(remote_filename);
    }
    url.path_segments()
        .and_then(|mut segments| segments.next_back().map(str::to_string))
        .filter(|last| !last.is_empty())
        .map_or_else(|| "download.jar".to_string(), |last| sanitize_filename(&last))
}

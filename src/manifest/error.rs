//! Error types for manifest loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the mod manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file does not exist
    #[error("could not find manifest {path}\n  Suggestion: Pass --manifest with the path to your data.json")]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Manifest file exists but could not be read
    #[error("IO error reading manifest {path}: {source}")]
    Io {
        /// The manifest path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Manifest content is not valid manifest JSON
    #[error("invalid manifest {path}: {source}")]
    Parse {
        /// The manifest path
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Maps an IO error to `NotFound` or `Io` depending on its kind.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Creates a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

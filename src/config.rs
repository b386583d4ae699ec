//! Run configuration.
//!
//! All settings for one reconciliation run live in [`RunConfig`], built once
//! at startup and passed by reference. [`RunConfig::validate`] performs the
//! checks that must pass before any network activity.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::http_client::HttpTimeouts;
use crate::parser::SUPPORTED_HOST;
use crate::resolver::DEFAULT_API_BASE_URL;

/// Default manifest location.
pub const DEFAULT_MANIFEST_PATH: &str = "data.json";

/// Default primary output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Default directory for files that did not match the target version.
pub const DEFAULT_FALLBACK_DIR: &str = "downloads/outdated-mods";

/// Default target game version.
pub const DEFAULT_GAME_VERSION: &str = "1.21.10";

/// Loader used when the manifest has no `Type` setting.
pub const DEFAULT_LOADER: &str = "fabric";

/// Fatal configuration problems detected before a run starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No target game version configured
    #[error("you must specify a game version\n  Suggestion: Pass --game-version, e.g. --game-version 1.21.10")]
    MissingGameVersion,

    /// Default loader is blank
    #[error("default loader must not be empty\n  Suggestion: Pass --default-loader, e.g. --default-loader fabric")]
    MissingLoader,

    /// API base URL is not an absolute http(s) URL
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured base URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Settings for a single reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Path to the manifest JSON document.
    pub manifest_path: PathBuf,
    /// Directory receiving strict-match downloads.
    pub output_dir: PathBuf,
    /// Directory receiving fallback (non-matching version) downloads.
    pub fallback_dir: PathBuf,
    /// Exact game version for strict lookups.
    pub game_version: String,
    /// Loader used when the manifest does not select one.
    pub default_loader: String,
    /// Version API base URL.
    pub api_base_url: String,
    /// Host that mod URLs must reference to be processed.
    pub supported_host: String,
    /// Remove the output directory before downloading.
    pub clean: bool,
    /// Timeouts for version API lookups.
    pub api_timeouts: HttpTimeouts,
    /// Timeouts for mod file downloads.
    pub download_timeouts: HttpTimeouts,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fallback_dir: PathBuf::from(DEFAULT_FALLBACK_DIR),
            game_version: DEFAULT_GAME_VERSION.to_string(),
            default_loader: DEFAULT_LOADER.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            supported_host: SUPPORTED_HOST.to_string(),
            clean: false,
            api_timeouts: HttpTimeouts::api(),
            download_timeouts: HttpTimeouts::download(),
        }
    }
}

impl RunConfig {
    /// Checks settings that must hold before the manifest is read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingGameVersion`] when the game version is
    /// blank, [`ConfigError::MissingLoader`] when the default loader is blank,
    /// and [`ConfigError::InvalidBaseUrl`] for a non-http(s) API base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_version.trim().is_empty() {
            return Err(ConfigError::MissingGameVersion);
        }
        if self.default_loader.trim().is_empty() {
            return Err(ConfigError::MissingLoader);
        }

        let parsed = Url::parse(&self.api_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: format!("scheme '{}' is not supported", parsed.scheme()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game_version, "1.21.10");
        assert_eq!(config.default_loader, "fabric");
        assert!(config.fallback_dir.starts_with(&config.output_dir));
    }

    #[test]
    fn test_blank_game_version_is_rejected() {
        let config = RunConfig {
            game_version: "  ".to_string(),
            ..RunConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingGameVersion));
    }

    #[test]
    fn test_blank_loader_is_rejected() {
        let config = RunConfig {
            default_loader: String::new(),
            ..RunConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingLoader));
    }

    #[test]
    fn test_non_http_base_url_is_rejected() {
        let config = RunConfig {
            api_base_url: "ftp://api.modrinth.com".to_string(),
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let config = RunConfig {
            api_base_url: "api.modrinth.com".to_string(),
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}

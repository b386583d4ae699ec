//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use mod_downloader_core::config::{
    DEFAULT_FALLBACK_DIR, DEFAULT_GAME_VERSION, DEFAULT_LOADER, DEFAULT_MANIFEST_PATH,
    DEFAULT_OUTPUT_DIR,
};
use mod_downloader_core::http_client::{API_REQUEST_TIMEOUT_SECS, DOWNLOAD_REQUEST_TIMEOUT_SECS};
use mod_downloader_core::resolver::DEFAULT_API_BASE_URL;
use mod_downloader_core::{HttpTimeouts, RunConfig};

/// Resolve and download a curated mod list from Modrinth.
///
/// Each mod in the manifest is looked up for the server's loader and the
/// target game version. Mods with no matching version are downloaded at their
/// latest version into a separate folder; mods with no versions at all are
/// listed at the end.
#[derive(Parser, Debug)]
#[command(name = "mod-downloader")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Manifest JSON file describing server settings and mod categories
    #[arg(short, long, default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Directory for mods matching the target game version
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory for mods only available at another version
    #[arg(short, long, default_value = DEFAULT_FALLBACK_DIR)]
    pub fallback_dir: PathBuf,

    /// Exact game version for strict matches
    #[arg(short, long, default_value = DEFAULT_GAME_VERSION)]
    pub game_version: String,

    /// Loader used when the manifest has no "Type" setting
    #[arg(long, default_value = DEFAULT_LOADER)]
    pub default_loader: String,

    /// Modrinth API base URL
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Delete the output directory before downloading
    #[arg(long)]
    pub clean: bool,

    /// Version API request timeout in seconds (1-600)
    #[arg(long, default_value_t = API_REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub api_timeout: u64,

    /// File download timeout in seconds (1-3600)
    #[arg(long, default_value_t = DOWNLOAD_REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub download_timeout: u64,
}

impl Args {
    /// Builds the run configuration from parsed arguments.
    #[must_use]
    pub fn to_config(&self) -> RunConfig {
        RunConfig {
            manifest_path: self.manifest.clone(),
            output_dir: self.output_dir.clone(),
            fallback_dir: self.fallback_dir.clone(),
            game_version: self.game_version.clone(),
            default_loader: self.default_loader.clone(),
            api_base_url: self.api_base_url.clone(),
            clean: self.clean,
            api_timeouts: HttpTimeouts {
                request_secs: self.api_timeout,
                ..HttpTimeouts::api()
            },
            download_timeouts: HttpTimeouts {
                request_secs: self.download_timeout,
                ..HttpTimeouts::download()
            },
            ..RunConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_match_default_config() {
        let args = Args::try_parse_from(["mod-downloader"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(!args.clean);
        assert_eq!(args.to_config(), RunConfig::default());
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["mod-downloader", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_overrides_flow_into_config() {
        let args = Args::try_parse_from([
            "mod-downloader",
            "--manifest",
            "server/data.json",
            "--output-dir",
            "mods",
            "--fallback-dir",
            "mods-old",
            "--game-version",
            "1.20.1",
            "--default-loader",
            "quilt",
            "--api-base-url",
            "http://localhost:9000",
            "--clean",
            "--api-timeout",
            "5",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.manifest_path, PathBuf::from("server/data.json"));
        assert_eq!(config.output_dir, PathBuf::from("mods"));
        assert_eq!(config.fallback_dir, PathBuf::from("mods-old"));
        assert_eq!(config.game_version, "1.20.1");
        assert_eq!(config.default_loader, "quilt");
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert!(config.clean);
        assert_eq!(config.api_timeouts.request_secs, 5);
    }

    #[test]
    fn test_cli_empty_game_version_parses_but_fails_validation() {
        let args = Args::try_parse_from(["mod-downloader", "--game-version", ""]).unwrap();
        assert!(args.to_config().validate().is_err());
    }

    #[test]
    fn test_cli_timeout_out_of_range_rejected() {
        let result = Args::try_parse_from(["mod-downloader", "--api-timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["mod-downloader", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["mod-downloader", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}

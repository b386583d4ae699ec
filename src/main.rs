//! CLI entry point for the mod downloader.

use anyhow::{Context, Result};
use clap::Parser;
use mod_downloader_core::output::print_summary;
use mod_downloader_core::{HttpClient, Manifest, ModrinthResolver, Reconciler, prepare_directories};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = args.to_config();
    config.validate()?;

    let manifest = Manifest::load(&config.manifest_path)?;
    let loader = manifest.loader(&config.default_loader);
    info!("Targeting: {loader} on Minecraft {}", config.game_version);

    prepare_directories(&config)?;

    let resolver = ModrinthResolver::with_base_url(&config.api_base_url, config.api_timeouts)
        .context("failed to initialize version resolver")?;
    let fetcher =
        HttpClient::new(config.download_timeouts).context("failed to initialize downloader")?;

    let report = Reconciler::new(&config, &resolver, &fetcher)
        .run(&manifest)
        .await;

    print_summary(&report, &config);
    Ok(())
}

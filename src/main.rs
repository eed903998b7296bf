//! Catalog Admin
//!
//! Desktop administration for the categories and products of a REST
//! catalog service.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::{Context, Result};
use catalog_client::RestClient;
use catalog_core::AdminConfig;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog-admin", version, about, long_about = None)]
struct Args {
    /// Base URL of the catalog service (overrides file and environment)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Configuration file (defaults to ./catalog-admin.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   Catalog Admin v{:<41}║", catalog_ui::VERSION);
    println!("║   Category and product management                         ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = AdminConfig::load(args.config.as_deref(), args.api_url.as_deref())
        .inspect_err(|e| tracing::error!(error = %e, "configuration rejected"))
        .context("failed to load configuration")?;
    tracing::debug!(?config, "configuration resolved");

    let client = RestClient::from_config(&config)
        .inspect_err(|e| tracing::error!(error = %e, "REST client unavailable"))
        .context("failed to build the REST client")?;

    // Launch the Dioxus desktop application
    catalog_ui::launch(&config, Arc::new(client));
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();
}

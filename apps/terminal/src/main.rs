//! # Registro Entry Point
//!
//! ```text
//! registro [--config <path>] [--api-url <url>]
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration (defaults → file → REGISTRO_* env → flags)
//! 3. Build the HTTP catalog client
//! 4. Run the command loop on stdin / stdout

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use registro_catalog::{CatalogClient, RegistroConfig};

/// Registration form gating a product catalog.
#[derive(Debug, Parser)]
#[command(name = "registro", version, about)]
struct Cli {
    /// Config file (default: platform config dir, registro/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    registro_terminal::init_tracing();
    let cli = Cli::parse();

    // An explicit --config must load; the default location may be absent or broken.
    let mut config = match cli.config {
        Some(path) => RegistroConfig::load(Some(path.clone()))
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RegistroConfig::load_or_default(None),
    };

    if let Some(url) = cli.api_url {
        config = config
            .with_base_url(url)
            .context("invalid --api-url")?;
    }

    info!(base_url = %config.api.base_url, "Configuration loaded");

    let client = CatalogClient::from_settings(config.api.clone()).context("building HTTP client")?;

    let mut stdout = tokio::io::stdout();
    registro_terminal::run(
        Arc::new(client),
        config.display,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
    )
    .await
    .context("terminal I/O failed")?;

    Ok(())
}

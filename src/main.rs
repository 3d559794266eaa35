//! siteaudit: competitor page audit service

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use siteaudit::{
    audit::Auditor,
    config::{Config, LogFormat},
    http::{AppState, HttpServer},
    storage::MemoryStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "siteaudit")]
#[command(about = "Competitor page audit service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listen address override (e.g., "0.0.0.0:8080")
    #[arg(short, long)]
    listen: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    if let Some(listen) = cli.listen {
        config.http.listen_addr = listen;
        config.validate()?;
    }

    init_tracing(&config, cli.verbose);
    info!("starting siteaudit v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(MemoryStore::new());
    let auditor = Auditor::new(&config.audit, store.clone())
        .context("Failed to initialize audit pipeline")?;

    let state = AppState {
        auditor: Arc::new(auditor),
        audits: store.clone(),
        competitors: store,
        sync_client: reqwest::Client::new(),
    };

    HttpServer::new(config.http.clone(), state).run().await
}

fn init_tracing(config: &Config, verbose: u8) {
    let directive = match verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    match config.logging.format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

//! # Task Tracker CLI
//!
//! Loads configuration (file, environment, flags), builds the HTTP store
//! client, runs one command, and prints the resulting task list.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use task_tracker::cli::Cli;
use task_tracker::commands::execute_command;
use task_tracker::{RestTaskStore, TrackerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(store = %config.store.base_url, collection = %config.store.collection, "using store");

    let store = RestTaskStore::new(&config).context("Failed to build store client")?;
    let output = execute_command(cli.command, store).await?;

    println!("{output}");
    Ok(())
}

/// Initialize tracing on stderr so stdout carries only the task list.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,task_tracker=info,tracker_core=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<TrackerConfig> {
    let base = match &cli.config {
        Some(path) => TrackerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => TrackerConfig::default(),
    };

    let config = base
        .with_env()
        .context("Invalid environment configuration")?
        .with_store_url(cli.store_url.clone());

    Ok(config)
}

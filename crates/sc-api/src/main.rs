//! Spendcluster API - read-only clustering and forecast endpoints

use anyhow::{Context, Result};
use clap::Parser;
use sc_core::{ClusterLabels, DataPaths, Dataset};

mod cli;
mod handlers;
mod response;
mod server;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let paths = DataPaths::new(&cli.data_dir);
    let dataset = Dataset::load(&paths, &ClusterLabels::default())
        .with_context(|| format!("Failed to load dataset from {}", paths.root().display()))?;

    server::serve(&cli.host, cli.port, dataset).await
}

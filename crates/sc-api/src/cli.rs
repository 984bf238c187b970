//! CLI argument definitions using clap derive API

use clap::Parser;

/// Spendcluster API - serve precomputed regional expenditure clustering
/// and forecasting results over HTTP
#[derive(Parser, Debug)]
#[command(name = "sc-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Data root containing result/ and api_exports/
    #[arg(short = 'd', long, default_value = "data", env = "SC_DATA_DIR")]
    pub data_dir: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

//! AWT CLI - Command line tool for the AirWaveThess report API.

use awt_core::config::{ApiConfig, DEFAULT_API_HOST};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "awt-cli",
    version,
    about = "Thessaloniki air and sea water quality toolkit"
)]
struct Cli {
    /// Base URL of the report API
    #[arg(long, env = "AWT_API_HOST", default_value = DEFAULT_API_HOST, global = true)]
    api_host: String,

    #[command(subcommand)]
    command: awt_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    awt_cmd::run(ApiConfig::new(&cli.api_host), cli.command).await
}

//! storefront-ai - multi-provider AI service for the storefront API

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use storefront_ai::config::{Config, DEFAULT_CONFIG_PATH};
use storefront_ai::server;
use storefront_ai::utils::logging::init_tracing;

/// Command line options; flags override the configuration file
#[derive(Debug, Parser)]
#[command(name = "storefront-ai", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "STOREFRONT_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Bind host
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(&cli.config).await?;
    if let Some(host) = cli.host {
        config.storefront.server.host = host;
    }
    if let Some(port) = cli.port {
        config.storefront.server.port = port;
    }
    config.validate()?;

    init_tracing(config.logging())?;
    server::builder::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

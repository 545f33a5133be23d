//! Balanced watcher.
//!
//! This binary periodically logs Balanced prices and the state of a watched
//! account, or calls a single contract method.

mod config;
mod error;
mod watcher;

use std::process::exit;

use balanced_sdk::{contracts::Balanced, provider::HttpProvider, settings::ContractSettings};
use clap::Parser;
use tracing::{error, info};

use config::{CliConfig, Command, EnvConfig};
use error::Result;

#[tokio::main]
async fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    let cli_config = CliConfig::parse();

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(env_config, cli_config).await {
        error!(%e, "Balanced watcher encountered an error, shutting down");
        exit(1);
    }
}

async fn run(env_config: EnvConfig, cli_config: CliConfig) -> Result<()> {
    let network = env_config.network();
    let node_url = env_config.node_url()?;
    info!(%network, %node_url, "Connecting");

    let settings = ContractSettings::new(network, HttpProvider::new(node_url))
        .with_step_limit(env_config.step_limit());
    let settings = match env_config.account()? {
        Some(account) => settings.with_account(account),
        None => settings,
    };
    let balanced = Balanced::new(settings);

    match cli_config.command {
        Command::Watch => watcher::watch(balanced, env_config.poll_interval()?).await,
        Command::Call(args) => watcher::call(&balanced, args.to_call_request()?).await,
    }
}

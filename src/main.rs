mod models;
mod processors;

use crate::models::Cli;
use crate::processors::EtherscanClient;
use clap::Parser;
use eyre::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr, stdout only carries the lookup result
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "contract_name=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(address = %cli.address, "resolving contract name");

    let client = EtherscanClient::new();
    let outcome = client.fetch_contract_name(&cli.address, &cli.api_key).await?;

    println!("{}", outcome);

    Ok(())
}

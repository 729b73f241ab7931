use std::{path::PathBuf, process};

use anyhow::{Context as _, Result};
use clap::Parser;
use devkit_config::{NetworksConfig, networks_file, selected_network, tracing::init_tracing};
use devkit_core::{FundingOutcome, FundingSettings, fund_network};
use tracing::{error, info};

/// Fund the node's accounts from its coinbase (e.g. `geth --dev`).
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Network to fund. Defaults to `DEVKIT_NETWORK`, then `HARDHAT_NETWORK`,
    /// then `hardhat`.
    #[arg(long, short)]
    network: Option<String>,

    /// Networks file. Defaults to `DEVKIT_CONFIG`, then `devkit.yaml`.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run(Args::parse()).await {
        error!("funding from coinbase failed: {err:#}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let network = args.network.unwrap_or_else(selected_network);
    let networks = match args.config {
        Some(path) => NetworksConfig::load_from_file(&path),
        None => NetworksConfig::load_or_default(&networks_file()),
    }
    .context("loading networks file")?;
    let target = networks.resolve(&network)?;

    let outcome = fund_network(&target, FundingSettings::from_env())
        .await
        .with_context(|| format!("funding accounts on `{network}`"))?;

    if let FundingOutcome::Funded(report) = outcome {
        for transfer in &report.transfers {
            println!("{}: {}", transfer.recipient, transfer.tx_hash);
        }
        info!(
            coinbase = %report.coinbase,
            accounts = report.transfers.len(),
            "funding complete"
        );
    }

    Ok(())
}

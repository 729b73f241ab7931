use std::{env, path::PathBuf, process};

use anyhow::{Context as _, Result};
use clap::Parser;
use devkit_config::tracing::init_tracing;
use devkit_setup::{CopyOutcome, seed_defaults};
use tracing::{error, info};

/// Put editor settings and `.env` in place from their `.default` copies.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Project root. Defaults to `DEVKIT_SETUP_ROOT`, then the working
    /// directory.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() {
    init_tracing();

    if let Err(err) = run(Args::parse()) {
        error!("setup failed: {err:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let root = match args.root.or_else(devkit_env::devkit_setup_root) {
        Some(root) => root,
        None => env::current_dir().context("resolving working directory")?,
    };

    let outcomes = seed_defaults(&root)
        .with_context(|| format!("seeding defaults under {}", root.display()))?;
    let copied = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, CopyOutcome::Copied { .. }))
        .count();

    info!(root = %root.display(), copied, "setup complete");
    Ok(())
}

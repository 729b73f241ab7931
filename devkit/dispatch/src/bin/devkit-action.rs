use std::process;

use clap::Parser as _;
use devkit_config::tracing::init_tracing;
use devkit_dispatch::{Cli, Toolchain, execute};
use tracing::error;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let invocation = cli.action.invocation(&Toolchain::from_env());

    if let Err(err) = execute(&invocation).await {
        error!("{err}");
        process::exit(err.exit_code());
    }
}

pub mod chain;
pub mod funding;
pub mod readiness;
pub mod rpc;

pub use chain::ChainClient;
use devkit_config::NetworkTarget;
pub use funding::{
    CoinbaseFunder, FundingError, FundingOutcome, FundingReport, FundingSettings,
    SubmittedTransfer,
};
pub use rpc::{RpcClient, RpcError};
use tracing::info;

/// Fund the accounts of `target` from its coinbase. In-process networks have
/// no endpoint to fund through and return immediately.
pub async fn fund_network(
    target: &NetworkTarget,
    settings: FundingSettings,
) -> Result<FundingOutcome, FundingError> {
    let Some(url) = target.url() else {
        info!(network = target.name(), "cannot run on in-process network");
        return Ok(FundingOutcome::InProcessNetwork {
            network: target.name().to_owned(),
        });
    };

    info!(network = target.name(), %url, "funding from coinbase ...");
    let client = RpcClient::new(url.clone(), settings.rpc_timeout)?;
    CoinbaseFunder::new(client, settings).run().await
}

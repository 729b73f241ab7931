use std::time::Duration;

use alloy_primitives::U64;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::chain::ChainClient;

/// Probe the node with `eth_chainId` until it answers. Retries forever at a
/// fixed interval: a dev node that never comes up leaves the caller waiting.
pub async fn wait_for_node<C>(client: &C, poll_interval: Duration) -> U64
where
    C: ChainClient + ?Sized,
{
    info!(poll_ms = poll_interval.as_millis(), "waiting for node to answer eth_chainId");

    let mut attempt: u64 = 0;
    loop {
        match client.chain_id().await {
            Ok(chain_id) => {
                info!(chain_id = chain_id.to::<u64>(), attempts = attempt + 1, "node is ready");
                return chain_id;
            }
            Err(err) => {
                attempt += 1;
                debug!(attempt, error = %err, "node not reachable yet");
                info!("retrying...");
                sleep(poll_interval).await;
            }
        }
    }
}

use std::time::Duration;

use futures::future::try_join_all;
use tokio::time::sleep;
use tracing::{debug, info};

use super::{FundingError, SubmittedTransfer};
use crate::{chain::ChainClient, rpc::TransactionReceipt};

/// Wait for every transfer concurrently. Fails as soon as one receipt reports
/// a revert or a lookup errors.
pub(super) async fn wait_for_confirmations<C>(
    client: &C,
    transfers: &[SubmittedTransfer],
    poll_interval: Duration,
) -> Result<Vec<TransactionReceipt>, FundingError>
where
    C: ChainClient + ?Sized,
{
    info!(pending = transfers.len(), "waiting for transfers to confirm");

    let waits = transfers
        .iter()
        .map(|transfer| wait_for_receipt(client, transfer, poll_interval));

    try_join_all(waits).await
}

async fn wait_for_receipt<C>(
    client: &C,
    transfer: &SubmittedTransfer,
    poll_interval: Duration,
) -> Result<TransactionReceipt, FundingError>
where
    C: ChainClient + ?Sized,
{
    loop {
        if let Some(receipt) = client.transaction_receipt(transfer.tx_hash).await? {
            if !receipt.is_success() {
                return Err(FundingError::TransferReverted {
                    recipient: transfer.recipient,
                    tx_hash: transfer.tx_hash,
                });
            }
            debug!(
                recipient = %transfer.recipient,
                tx = %transfer.tx_hash,
                block = ?receipt.block_number,
                "transfer confirmed"
            );
            return Ok(receipt);
        }

        sleep(poll_interval).await;
    }
}

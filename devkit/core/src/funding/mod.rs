mod confirm;
pub mod plan;


use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use devkit_config::{
    constants::{
        DEFAULT_READY_POLL_INTERVAL, DEFAULT_RECEIPT_POLL_INTERVAL, DEFAULT_RPC_TIMEOUT,
        MAX_FUNDING_AMOUNT, TRANSFER_RESERVATION,
    },
    intervals,
};
use thiserror::Error;
use tracing::info;

use crate::{
    chain::ChainClient,
    readiness::wait_for_node,
    rpc::{BlockTag, RpcError},
};

#[derive(Debug, Error)]
pub enum FundingError {
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error(
        "per-account amount {amount} does not exceed the {reservation} wei reservation; \
         coinbase balance is too small for this many accounts"
    )]
    AmountBelowReservation { amount: U256, reservation: U256 },
    #[error("transfer to {recipient} reverted (tx {tx_hash})")]
    TransferReverted { recipient: Address, tx_hash: TxHash },
}

/// Knobs of a funding run. [`Default`] holds the fixed values; [`from_env`]
/// lets the poll intervals and RPC timeout be tuned.
///
/// [`from_env`]: FundingSettings::from_env
#[derive(Clone, Copy, Debug)]
pub struct FundingSettings {
    pub max_amount: U256,
    pub reservation: U256,
    pub ready_poll_interval: Duration,
    pub receipt_poll_interval: Duration,
    pub rpc_timeout: Duration,
}

impl Default for FundingSettings {
    fn default() -> Self {
        Self {
            max_amount: MAX_FUNDING_AMOUNT,
            reservation: TRANSFER_RESERVATION,
            ready_poll_interval: DEFAULT_READY_POLL_INTERVAL,
            receipt_poll_interval: DEFAULT_RECEIPT_POLL_INTERVAL,
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
        }
    }
}

impl FundingSettings {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ready_poll_interval: intervals::ready_poll_interval(),
            receipt_poll_interval: intervals::receipt_poll_interval(),
            rpc_timeout: intervals::rpc_timeout(),
            ..Self::default()
        }
    }
}

/// A transfer the node accepted into its pool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmittedTransfer {
    pub recipient: Address,
    pub value: U256,
    pub nonce: u64,
    pub tx_hash: TxHash,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingReport {
    pub coinbase: Address,
    pub amount: U256,
    pub transfers: Vec<SubmittedTransfer>,
}

/// How a run ended. Everything but `Funded` is a no-op exit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FundingOutcome {
    InProcessNetwork { network: String },
    NoCoinbase,
    NoRecipients { coinbase: Address },
    ZeroBalance { coinbase: Address },
    Funded(FundingReport),
}

/// Moves funds from the node's coinbase to every other account it manages.
pub struct CoinbaseFunder<C> {
    client: C,
    settings: FundingSettings,
}

impl<C> CoinbaseFunder<C>
where
    C: ChainClient,
{
    #[must_use]
    pub const fn new(client: C, settings: FundingSettings) -> Self {
        Self { client, settings }
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Wait for the node, then fund. Submission and confirmation failures are
    /// fatal; missing preconditions end the run early with `Ok`.
    pub async fn run(&self) -> Result<FundingOutcome, FundingError> {
        wait_for_node(&self.client, self.settings.ready_poll_interval).await;
        self.fund().await
    }

    async fn fund(&self) -> Result<FundingOutcome, FundingError> {
        let Some(coinbase) = self.client.coinbase().await? else {
            info!("no coinbase");
            return Ok(FundingOutcome::NoCoinbase);
        };

        let accounts = self.client.accounts().await?;
        let recipients = plan::select_recipients(coinbase, &accounts);
        if recipients.is_empty() {
            info!(%coinbase, "no accounts to fund besides the coinbase");
            return Ok(FundingOutcome::NoRecipients { coinbase });
        }

        let balance = self.client.balance(coinbase, BlockTag::Latest).await?;
        let nonce = self
            .client
            .transaction_count(coinbase, BlockTag::Pending)
            .await?;

        if balance.is_zero() {
            info!(%coinbase, "coinbase has zero balance");
            return Ok(FundingOutcome::ZeroBalance { coinbase });
        }

        let amount = plan::per_account_amount(balance, recipients.len(), self.settings.max_amount);
        let value = plan::transfer_value(amount, self.settings.reservation)?;
        info!(
            %coinbase,
            %balance,
            nonce,
            recipients = recipients.len(),
            %value,
            "funding accounts from coinbase"
        );

        let mut transfers = Vec::with_capacity(recipients.len());
        for request in plan::plan_transfers(coinbase, &recipients, value, nonce) {
            let tx_hash = self.client.send_transaction(&request).await?;
            info!(recipient = %request.to, tx = %tx_hash, "transfer submitted");
            transfers.push(SubmittedTransfer {
                recipient: request.to,
                value: request.value,
                nonce: request.nonce.to::<u64>(),
                tx_hash,
            });
        }

        confirm::wait_for_confirmations(
            &self.client,
            &transfers,
            self.settings.receipt_poll_interval,
        )
        .await?;
        info!(funded = transfers.len(), "all transfers confirmed");

        Ok(FundingOutcome::Funded(FundingReport {
            coinbase,
            amount,
            transfers,
        }))
    }
}

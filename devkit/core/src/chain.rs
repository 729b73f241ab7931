use alloy_primitives::{Address, TxHash, U64, U256};
use async_trait::async_trait;

use crate::rpc::{BlockTag, RpcError, TransactionReceipt, TransactionRequest};

/// The node queries the funding tool relies on.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Cheap liveness query; only success or failure matters to callers.
    async fn chain_id(&self) -> Result<U64, RpcError>;

    /// Block-reward account, `None` when the node has none configured.
    async fn coinbase(&self) -> Result<Option<Address>, RpcError>;

    /// Accounts the node can sign for, in node order.
    async fn accounts(&self) -> Result<Vec<Address>, RpcError>;

    async fn balance(&self, account: Address, tag: BlockTag) -> Result<U256, RpcError>;

    async fn transaction_count(&self, account: Address, tag: BlockTag) -> Result<u64, RpcError>;

    /// Submit a transfer for the node to sign; returns once it is pooled.
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TxHash, RpcError>;

    /// `None` while the transaction is still pending.
    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError>;
}

use alloy_primitives::{Address, TxHash, U64, U256};
use serde::{Deserialize, Serialize};

/// Block tag passed to state queries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Pending,
}

/// Parameters of an `eth_sendTransaction` call signed by the node.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub nonce: U64,
}

/// The subset of `eth_getTransactionReceipt` the tools look at.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `0x1` on success, `0x0` when the transaction reverted. Absent on
    /// pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_none_or(|status| status == U64::from(1))
    }
}

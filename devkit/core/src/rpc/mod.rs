mod types;

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use alloy_primitives::{Address, TxHash, U64, U256};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::trace;
use url::Url;
pub use types::{BlockTag, TransactionReceipt, TransactionRequest};

use crate::chain::ChainClient;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{method} request failed: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} rejected by node (code {code}): {message}")]
    Node {
        method: &'static str,
        code: i64,
        message: String,
    },
    #[error("{method} returned an unexpected result: {reason}")]
    InvalidResult { method: &'static str, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Serialize)]
struct RequestEnvelope<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

#[derive(Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

/// Thin JSON-RPC 2.0 client for an EVM node's HTTP endpoint.
#[derive(Clone, Debug)]
pub struct RpcClient {
    url: Url,
    client: Client,
    next_id: Arc<AtomicU64>,
}

impl RpcClient {
    /// Build a client whose requests each time out after `request_timeout`.
    pub fn new(url: Url, request_timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(RpcError::Client)?;
        Ok(Self {
            url,
            client,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Issue one call and decode its `result`. A `null` result decodes
    /// only into types that accept it, such as `Option<T>`.
    pub async fn call<P, R>(&self, method: &'static str, params: P) -> Result<R, RpcError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        trace!(method, id, url = %self.url, "sending JSON-RPC request");

        let envelope: ResponseEnvelope = self
            .client
            .post(self.url.clone())
            .json(&RequestEnvelope {
                jsonrpc: "2.0",
                id,
                method,
                params,
            })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| RpcError::Transport { method, source })?
            .json()
            .await
            .map_err(|source| RpcError::Transport { method, source })?;

        if let Some(ErrorObject { code, message }) = envelope.error {
            return Err(RpcError::Node {
                method,
                code,
                message,
            });
        }

        serde_json::from_value(envelope.result.unwrap_or(Value::Null)).map_err(|err| {
            RpcError::InvalidResult {
                method,
                reason: err.to_string(),
            }
        })
    }
}

#[async_trait]
impl ChainClient for RpcClient {
    async fn chain_id(&self) -> Result<U64, RpcError> {
        self.call("eth_chainId", json!([])).await
    }

    async fn coinbase(&self) -> Result<Option<Address>, RpcError> {
        let raw: Option<String> = self.call("eth_coinbase", json!([])).await?;
        parse_coinbase(raw.as_deref())
    }

    async fn accounts(&self) -> Result<Vec<Address>, RpcError> {
        self.call("eth_accounts", json!([])).await
    }

    async fn balance(&self, account: Address, tag: BlockTag) -> Result<U256, RpcError> {
        self.call("eth_getBalance", json!([account, tag])).await
    }

    async fn transaction_count(&self, account: Address, tag: BlockTag) -> Result<u64, RpcError> {
        let count: U64 = self
            .call("eth_getTransactionCount", json!([account, tag]))
            .await?;
        Ok(count.to::<u64>())
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<TxHash, RpcError> {
        self.call("eth_sendTransaction", json!([request])).await
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        self.call("eth_getTransactionReceipt", json!([hash])).await
    }
}

/// Nodes report "no coinbase" as `null`, an empty string, or the zero
/// address depending on the client.
fn parse_coinbase(raw: Option<&str>) -> Result<Option<Address>, RpcError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let address = raw
        .parse::<Address>()
        .map_err(|err| RpcError::InvalidResult {
            method: "eth_coinbase",
            reason: format!("`{raw}` is not an address: {err}"),
        })?;

    Ok((!address.is_zero()).then_some(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_zero_coinbase_means_none() {
        assert_eq!(parse_coinbase(None).unwrap(), None);
        assert_eq!(parse_coinbase(Some("")).unwrap(), None);
        assert_eq!(
            parse_coinbase(Some("0x0000000000000000000000000000000000000000")).unwrap(),
            None
        );
    }

    #[test]
    fn coinbase_address_is_parsed() {
        let parsed = parse_coinbase(Some("0x71562b71999873DB5b286dF957af199Ec94617F7")).unwrap();
        assert_eq!(
            parsed,
            Some(
                "0x71562b71999873db5b286df957af199ec94617f7"
                    .parse::<Address>()
                    .unwrap()
            )
        );
    }

    #[test]
    fn garbage_coinbase_is_rejected() {
        let err = parse_coinbase(Some("miner")).unwrap_err();
        assert!(matches!(
            err,
            RpcError::InvalidResult {
                method: "eth_coinbase",
                ..
            }
        ));
    }
}

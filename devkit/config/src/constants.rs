use std::time::Duration;

use alloy_primitives::U256;

/// Wei in one native token.
pub const WEI_PER_TOKEN: u64 = 1_000_000_000_000_000_000;

/// Upper bound on what a single recipient receives from the coinbase (10
/// tokens).
pub const MAX_FUNDING_AMOUNT: U256 = U256::from_limbs([10 * WEI_PER_TOKEN, 0, 0, 0]);

/// Flat amount held back from every funding transfer so the recipient lands
/// near a round balance.
pub const TRANSFER_RESERVATION: U256 = U256::from_limbs([21_000, 0, 0, 0]);

/// Delay between two liveness probes while waiting for the node.
pub const DEFAULT_READY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Delay between two receipt lookups for a pending transfer.
pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Per-request HTTP timeout for JSON-RPC calls.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Network used when neither a flag nor the environment selects one.
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Networks file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "devkit.yaml";

/// Built-in in-process network name. It has no RPC endpoint.
pub const IN_PROCESS_NETWORK: &str = "hardhat";

/// Built-in network pointing at a node on the local machine.
pub const LOCALHOST_NETWORK: &str = "localhost";

/// Endpoint of the built-in `localhost` network.
pub const LOCALHOST_URL: &str = "http://127.0.0.1:8545";

use std::time::Duration;

use devkit_env as env;

use crate::constants::{
    DEFAULT_READY_POLL_INTERVAL, DEFAULT_RECEIPT_POLL_INTERVAL, DEFAULT_RPC_TIMEOUT,
};

/// Zero or unset falls back to `default`.
fn non_zero_or(value: Option<u64>, unit: fn(u64) -> Duration, default: Duration) -> Duration {
    value
        .filter(|value| *value > 0)
        .map(unit)
        .unwrap_or(default)
}

/// Resolve the readiness poll interval from `DEVKIT_READY_POLL_SECS`, falling
/// back to the default.
pub fn ready_poll_interval() -> Duration {
    non_zero_or(
        env::devkit_ready_poll_secs(),
        Duration::from_secs,
        DEFAULT_READY_POLL_INTERVAL,
    )
}

/// Resolve the receipt poll interval from `DEVKIT_RECEIPT_POLL_MS`.
pub fn receipt_poll_interval() -> Duration {
    non_zero_or(
        env::devkit_receipt_poll_millis(),
        Duration::from_millis,
        DEFAULT_RECEIPT_POLL_INTERVAL,
    )
}

/// Resolve the per-request RPC timeout from `DEVKIT_RPC_TIMEOUT_SECS`.
pub fn rpc_timeout() -> Duration {
    non_zero_or(
        env::devkit_rpc_timeout_secs(),
        Duration::from_secs,
        DEFAULT_RPC_TIMEOUT,
    )
}

use std::{env, path::PathBuf};

fn first_non_empty(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

#[must_use]
pub fn devkit_network() -> Option<String> {
    first_non_empty([
        env::var("DEVKIT_NETWORK").ok(),
        env::var("HARDHAT_NETWORK").ok(),
    ])
}

#[must_use]
pub fn devkit_config_path() -> Option<PathBuf> {
    env::var("DEVKIT_CONFIG").ok().map(PathBuf::from)
}

#[must_use]
pub fn devkit_ready_poll_secs() -> Option<u64> {
    env::var("DEVKIT_READY_POLL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

#[must_use]
pub fn devkit_receipt_poll_millis() -> Option<u64> {
    env::var("DEVKIT_RECEIPT_POLL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

#[must_use]
pub fn devkit_rpc_timeout_secs() -> Option<u64> {
    env::var("DEVKIT_RPC_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}

#[must_use]
pub fn devkit_hardhat_bin() -> Option<String> {
    env::var("DEVKIT_HARDHAT_BIN").ok().filter(|v| !v.is_empty())
}

#[must_use]
pub fn devkit_ts_node_bin() -> Option<String> {
    env::var("DEVKIT_TS_NODE_BIN").ok().filter(|v| !v.is_empty())
}

#[must_use]
pub fn devkit_mocha_bin() -> Option<String> {
    env::var("DEVKIT_MOCHA_BIN").ok().filter(|v| !v.is_empty())
}

#[must_use]
pub fn devkit_setup_root() -> Option<PathBuf> {
    env::var("DEVKIT_SETUP_ROOT").ok().map(PathBuf::from)
}

#[must_use]
pub fn rust_log() -> Option<String> {
    env::var("RUST_LOG").ok()
}

pub mod constants;
pub mod intervals;
pub mod network;
pub mod tracing;

use std::path::PathBuf;

pub use network::{NetworkConfigError, NetworkEntry, NetworkTarget, NetworksConfig};

/// Network name from `DEVKIT_NETWORK`/`HARDHAT_NETWORK`, else the in-process
/// default.
#[must_use]
pub fn selected_network() -> String {
    devkit_env::devkit_network().unwrap_or_else(|| constants::DEFAULT_NETWORK.to_owned())
}

/// Networks file from `DEVKIT_CONFIG`, else `devkit.yaml` in the working
/// directory.
#[must_use]
pub fn networks_file() -> PathBuf {
    devkit_env::devkit_config_path()
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_FILE))
}

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::constants::{IN_PROCESS_NETWORK, LOCALHOST_NETWORK, LOCALHOST_URL};

#[derive(Debug, Error)]
pub enum NetworkConfigError {
    #[error("failed to read networks file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse networks file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown network `{name}` (known: {known})")]
    UnknownNetwork { name: String, known: String },
}

/// One entry of the `networks` map. Entries without a `url` describe an
/// in-process network.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct NetworkEntry {
    #[serde(default)]
    pub url: Option<Url>,
}

/// Networks file, e.g.
///
/// ```yaml
/// networks:
///   localhost:
///     url: http://127.0.0.1:8545
///   staging:
///     url: https://rpc.staging.example
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NetworksConfig {
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkEntry>,
}

impl NetworksConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, NetworkConfigError> {
        let content = fs::read_to_string(path).map_err(|source| NetworkConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| NetworkConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Self::load_from_file`], but a missing file yields an empty
    /// config so the built-in networks still resolve.
    pub fn load_or_default(path: &Path) -> Result<Self, NetworkConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Look a network up by name. Entries from the file shadow the built-in
    /// `hardhat` and `localhost` networks.
    pub fn resolve(&self, name: &str) -> Result<NetworkTarget, NetworkConfigError> {
        if let Some(entry) = self.networks.get(name) {
            return Ok(NetworkTarget::from_entry(name, entry));
        }

        match name {
            IN_PROCESS_NETWORK => Ok(NetworkTarget::in_process(name)),
            LOCALHOST_NETWORK => Ok(NetworkTarget::remote(name, localhost_url())),
            _ => Err(NetworkConfigError::UnknownNetwork {
                name: name.to_owned(),
                known: self.known_names().join(", "),
            }),
        }
    }

    fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = [IN_PROCESS_NETWORK, LOCALHOST_NETWORK]
            .into_iter()
            .map(str::to_owned)
            .chain(self.networks.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

fn localhost_url() -> Url {
    Url::parse(LOCALHOST_URL).unwrap_or_else(|_| unreachable!("LOCALHOST_URL is a valid URL"))
}

/// A resolved network: either reachable over JSON-RPC at `url`, or simulated
/// in-process by the toolchain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkTarget {
    name: String,
    url: Option<Url>,
}

impl NetworkTarget {
    #[must_use]
    pub fn in_process(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    #[must_use]
    pub fn remote(name: impl Into<String>, url: Url) -> Self {
        Self {
            name: name.into(),
            url: Some(url),
        }
    }

    fn from_entry(name: &str, entry: &NetworkEntry) -> Self {
        Self {
            name: name.to_owned(),
            url: entry.url.clone(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[must_use]
    pub const fn is_in_process(&self) -> bool {
        self.url.is_none()
    }
}

use std::{fmt, path::Path};

use devkit_env as env;

use crate::action::{Action, ForkOptions};

const HARDHAT: &str = "hardhat";
const TS_NODE: &str = "ts-node";
const MOCHA: &str = "mocha";

/// Programs the dispatcher launches. Each can be swapped through
/// `DEVKIT_HARDHAT_BIN`, `DEVKIT_TS_NODE_BIN` and `DEVKIT_MOCHA_BIN`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toolchain {
    pub hardhat: String,
    pub ts_node: String,
    pub mocha: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            hardhat: HARDHAT.to_owned(),
            ts_node: TS_NODE.to_owned(),
            mocha: MOCHA.to_owned(),
        }
    }
}

impl Toolchain {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            hardhat: env::devkit_hardhat_bin().unwrap_or(defaults.hardhat),
            ts_node: env::devkit_ts_node_bin().unwrap_or(defaults.ts_node),
            mocha: env::devkit_mocha_bin().unwrap_or(defaults.mocha),
        }
    }
}

/// A fully resolved command: environment, program and arguments. Nothing is
/// interpreted by a shell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub env: Vec<(String, String)>,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: &str) -> Self {
        Self {
            env: Vec::new(),
            program: program.to_owned(),
            args: Vec::new(),
        }
    }

    fn env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.env.push((key.to_owned(), value.into()));
        self
    }

    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn fork_env(self, network: &str, fork: &ForkOptions) -> Self {
        let mut invocation = self.env("HARDHAT_FORK", network);
        if let Some(block) = &fork.block_number {
            invocation = invocation.env("HARDHAT_FORK_NUMBER", block);
        }
        if fork.no_impersonation {
            invocation = invocation.env("HARDHAT_DEPLOY_NO_IMPERSONATION", "true");
        }
        invocation
    }

    #[must_use]
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{key}={value} ")?;
        }
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

impl Action {
    /// Translate the action into the toolchain command it stands for.
    #[must_use]
    pub fn invocation(&self, toolchain: &Toolchain) -> Invocation {
        match self {
            Self::Run(args) => Invocation::new(&toolchain.ts_node)
                .env("HARDHAT_DEPLOY_LOG", "true")
                .env("HARDHAT_NETWORK", &args.network)
                .arg("--files")
                .arg(path_arg(&args.script))
                .args(&args.extra),
            Self::Deploy(args) => Invocation::new(&toolchain.hardhat)
                .args(["--network", args.network.as_str(), "deploy", "--report-gas"])
                .args(&args.extra),
            Self::Verify(args) => Invocation::new(&toolchain.hardhat)
                .args(["--network", args.network.as_str(), "etherscan-verify"])
                .args(&args.extra),
            Self::Export(args) => Invocation::new(&toolchain.hardhat)
                .args(["--network", args.network.as_str(), "export", "--export"])
                .arg(path_arg(&args.file)),
            Self::ForkRun(args) => {
                let (fork, deploy, extra) = args.split_extra();
                let mut invocation = Invocation::new(&toolchain.ts_node);
                if deploy {
                    invocation = invocation.env("HARDHAT_DEPLOY_FIXTURE", "true");
                }
                invocation
                    .env("HARDHAT_DEPLOY_LOG", "true")
                    .fork_env(&args.network, &fork)
                    .arg("--files")
                    .arg(path_arg(&args.script))
                    .args(extra)
            }
            Self::ForkDeploy(args) => {
                let (fork, extra) = args.split_extra();
                Invocation::new(&toolchain.hardhat)
                    .fork_env(&args.network, &fork)
                    .args(["deploy", "--report-gas"])
                    .args(extra)
            }
            Self::ForkNode(args) => {
                let (fork, extra) = args.split_extra();
                Invocation::new(&toolchain.hardhat)
                    .fork_env(&args.network, &fork)
                    .args(["node", "--hostname", "0.0.0.0"])
                    .args(extra)
            }
            Self::ForkTest(args) => {
                let (fork, extra) = args.split_extra();
                Invocation::new(&toolchain.mocha)
                    .env("HARDHAT_DEPLOY_FIXTURE", "true")
                    .fork_env(&args.network, &fork)
                    .env("HARDHAT_COMPILE", "true")
                    .args(["--bail", "--recursive", "test"])
                    .args(extra)
            }
            Self::ForkDev(args) => {
                let (fork, extra) = args.split_extra();
                Invocation::new(&toolchain.hardhat)
                    .fork_env(&args.network, &fork)
                    .args([
                        "node",
                        "--hostname",
                        "0.0.0.0",
                        "--watch",
                        "--export",
                        "contractsInfo.json",
                    ])
                    .args(extra)
            }
            Self::TenderlyPush(args) => Invocation::new(&toolchain.hardhat)
                .args(["--network", args.network.as_str(), "tenderly:push"]),
        }
    }
}

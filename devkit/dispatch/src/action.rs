//! Command line of the action dispatcher.
//!
//! Every action takes its fixed positional arguments first. Options listed on
//! the action are recognised anywhere after them; everything else, including
//! unknown `--flags`, is forwarded verbatim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "devkit-action", about = "Shortcuts for the hardhat toolchain", version)]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Run a script with ts-node against a network.
    Run(ScriptArgs),

    /// Deploy to a network and report gas.
    Deploy(NetworkArgs),

    /// Verify deployed contracts on etherscan.
    Verify(NetworkArgs),

    /// Export deployment info of a network to a file.
    Export(ExportArgs),

    /// Run a script against a fork of a network.
    #[command(name = "fork:run")]
    ForkRun(ForkScriptArgs),

    /// Deploy on a fork of a network.
    #[command(name = "fork:deploy")]
    ForkDeploy(ForkArgs),

    /// Start a local node forking a network.
    #[command(name = "fork:node")]
    ForkNode(ForkArgs),

    /// Run the test suite against a fork of a network.
    #[command(name = "fork:test")]
    ForkTest(ForkArgs),

    /// Start a watching fork node that exports contract info.
    #[command(name = "fork:dev")]
    ForkDev(ForkArgs),

    /// Push deployments of a network to tenderly.
    #[command(name = "tenderly:push")]
    TenderlyPush(PushArgs),
}

#[derive(Debug, Args)]
pub struct NetworkArgs {
    pub network: String,

    /// Forwarded to the underlying command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ScriptArgs {
    pub network: String,

    pub script: PathBuf,

    /// Forwarded to the script.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub network: String,

    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct PushArgs {
    pub network: String,
}

/// Options shared by every `fork:*` action.
#[derive(Clone, Debug, Default, Eq, PartialEq, Args)]
pub struct ForkOptions {
    /// Block to fork from, decimal or `0x` hex; defaults to the network's
    /// latest block. Handed to the toolchain as given.
    #[arg(long = "blockNumber", value_name = "BLOCK")]
    pub block_number: Option<String>,

    /// Use real signers only instead of impersonating named accounts.
    #[arg(long)]
    pub no_impersonation: bool,
}

#[derive(Debug, Args)]
pub struct ForkArgs {
    pub network: String,

    #[command(flatten)]
    pub fork: ForkOptions,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ForkScriptArgs {
    pub network: String,

    pub script: PathBuf,

    /// Run the deploy fixture before the script.
    #[arg(long)]
    pub deploy: bool,

    #[command(flatten)]
    pub fork: ForkOptions,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Picks the fork options out of pass-through arguments. Clap hands every
/// argument after the first pass-through value to `extra`, known or not.
fn take_fork_options(
    extra: &[String],
    fork: &mut ForkOptions,
    mut deploy: Option<&mut bool>,
) -> Vec<String> {
    let mut rest = Vec::with_capacity(extra.len());
    let mut args = extra.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-impersonation" => fork.no_impersonation = true,
            "--deploy" if deploy.is_some() => {
                if let Some(deploy) = deploy.as_deref_mut() {
                    *deploy = true;
                }
            }
            "--blockNumber" => match args.next() {
                Some(block) => fork.block_number = Some(block.clone()),
                None => rest.push(arg.clone()),
            },
            other => match other.strip_prefix("--blockNumber=") {
                Some(block) => fork.block_number = Some(block.to_owned()),
                None => rest.push(arg.clone()),
            },
        }
    }
    rest
}

impl ForkArgs {
    /// Fork options from anywhere on the line, and the remaining pass-through
    /// arguments.
    #[must_use]
    pub fn split_extra(&self) -> (ForkOptions, Vec<String>) {
        let mut fork = self.fork.clone();
        let rest = take_fork_options(&self.extra, &mut fork, None);
        (fork, rest)
    }
}

impl ForkScriptArgs {
    /// Like [`ForkArgs::split_extra`], also resolving `--deploy`.
    #[must_use]
    pub fn split_extra(&self) -> (ForkOptions, bool, Vec<String>) {
        let mut fork = self.fork.clone();
        let mut deploy = self.deploy;
        let rest = take_fork_options(&self.extra, &mut fork, Some(&mut deploy));
        (fork, deploy, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn known_options_are_taken_from_anywhere() {
        let mut fork = ForkOptions::default();
        let rest = take_fork_options(
            &strings(&["--port", "8546", "--blockNumber=0x10", "--no-impersonation"]),
            &mut fork,
            None,
        );

        assert_eq!(rest, strings(&["--port", "8546"]));
        assert_eq!(fork.block_number.as_deref(), Some("0x10"));
        assert!(fork.no_impersonation);
    }

    #[test]
    fn deploy_passes_through_where_it_is_not_an_option() {
        let mut fork = ForkOptions::default();
        let rest = take_fork_options(&strings(&["--deploy", "--blockNumber"]), &mut fork, None);

        assert_eq!(rest, strings(&["--deploy", "--blockNumber"]));
        assert_eq!(fork, ForkOptions::default());
    }
}

use clap::Parser as _;
use devkit_dispatch::{Cli, Invocation, Toolchain};

fn invocation(argv: &[&str]) -> Invocation {
    let cli = Cli::try_parse_from(std::iter::once("devkit-action").chain(argv.iter().copied()))
        .unwrap_or_else(|err| panic!("failed to parse {argv:?}: {err}"));
    cli.action.invocation(&Toolchain::default())
}

#[test]
fn run_sets_network_and_forwards_extras() {
    let invocation = invocation(&["run", "localhost", "scripts/fund.ts", "--verbose", "7"]);

    assert_eq!(invocation.program, "ts-node");
    assert_eq!(invocation.env_value("HARDHAT_DEPLOY_LOG"), Some("true"));
    assert_eq!(invocation.env_value("HARDHAT_NETWORK"), Some("localhost"));
    assert_eq!(
        invocation.args,
        vec!["--files", "scripts/fund.ts", "--verbose", "7"]
    );
}

#[test]
fn deploy_reports_gas() {
    let invocation = invocation(&["deploy", "sepolia", "--tags", "Token"]);

    assert_eq!(
        invocation.to_string(),
        "hardhat --network sepolia deploy --report-gas --tags Token"
    );
}

#[test]
fn verify_and_export_target_the_network() {
    assert_eq!(
        invocation(&["verify", "mainnet"]).to_string(),
        "hardhat --network mainnet etherscan-verify"
    );
    assert_eq!(
        invocation(&["export", "mainnet", "deployments.json"]).to_string(),
        "hardhat --network mainnet export --export deployments.json"
    );
    assert_eq!(
        invocation(&["tenderly:push", "mainnet"]).to_string(),
        "hardhat --network mainnet tenderly:push"
    );
}

#[test]
fn fork_run_translates_options_into_env() {
    let invocation = invocation(&[
        "fork:run",
        "mainnet",
        "scripts/check.ts",
        "--deploy",
        "--blockNumber",
        "17000000",
        "--no-impersonation",
        "arg1",
    ]);

    assert_eq!(
        invocation.env,
        vec![
            ("HARDHAT_DEPLOY_FIXTURE".to_owned(), "true".to_owned()),
            ("HARDHAT_DEPLOY_LOG".to_owned(), "true".to_owned()),
            ("HARDHAT_FORK".to_owned(), "mainnet".to_owned()),
            ("HARDHAT_FORK_NUMBER".to_owned(), "17000000".to_owned()),
            ("HARDHAT_DEPLOY_NO_IMPERSONATION".to_owned(), "true".to_owned()),
        ]
    );
    assert_eq!(invocation.args, vec!["--files", "scripts/check.ts", "arg1"]);
}

#[test]
fn fork_options_are_optional() {
    let invocation = invocation(&["fork:deploy", "mainnet"]);

    assert_eq!(invocation.to_string(), "HARDHAT_FORK=mainnet hardhat deploy --report-gas");
}

#[test]
fn fork_node_and_dev_listen_on_all_interfaces() {
    assert_eq!(
        invocation(&["fork:node", "mainnet", "--blockNumber", "5", "--port", "8546"]).to_string(),
        "HARDHAT_FORK=mainnet HARDHAT_FORK_NUMBER=5 hardhat node --hostname 0.0.0.0 --port 8546"
    );
    assert_eq!(
        invocation(&["fork:dev", "mainnet"]).to_string(),
        "HARDHAT_FORK=mainnet hardhat node --hostname 0.0.0.0 --watch --export contractsInfo.json"
    );
}

#[test]
fn fork_test_compiles_and_runs_mocha() {
    let invocation = invocation(&["fork:test", "mainnet", "--no-impersonation"]);

    assert_eq!(invocation.program, "mocha");
    assert_eq!(
        invocation.to_string(),
        "HARDHAT_DEPLOY_FIXTURE=true HARDHAT_FORK=mainnet HARDHAT_DEPLOY_NO_IMPERSONATION=true \
         HARDHAT_COMPILE=true mocha --bail --recursive test"
    );
}

#[test]
fn missing_fixed_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["devkit-action", "run", "localhost"]).is_err());
    assert!(Cli::try_parse_from(["devkit-action", "deploy"]).is_err());
    assert!(Cli::try_parse_from(["devkit-action", "export", "mainnet"]).is_err());
}

#[test]
fn toolchain_programs_can_be_overridden() {
    let cli = Cli::try_parse_from(["devkit-action", "deploy", "localhost"]).unwrap();
    let toolchain = Toolchain {
        hardhat: "npx".to_owned(),
        ..Toolchain::default()
    };

    assert_eq!(cli.action.invocation(&toolchain).program, "npx");
}

#[test]
fn fork_options_after_pass_through_arguments_are_still_recognised() {
    assert_eq!(
        invocation(&["fork:node", "mainnet", "--port", "8546", "--blockNumber", "5"]).to_string(),
        "HARDHAT_FORK=mainnet HARDHAT_FORK_NUMBER=5 hardhat node --hostname 0.0.0.0 --port 8546"
    );

    let invocation = invocation(&[
        "fork:run",
        "mainnet",
        "scripts/check.ts",
        "arg1",
        "--deploy",
        "--no-impersonation",
    ]);
    assert_eq!(invocation.env_value("HARDHAT_DEPLOY_FIXTURE"), Some("true"));
    assert_eq!(invocation.env_value("HARDHAT_DEPLOY_NO_IMPERSONATION"), Some("true"));
    assert_eq!(invocation.args, vec!["--files", "scripts/check.ts", "arg1"]);
}

#[test]
fn deploy_flag_is_forwarded_outside_fork_run() {
    let invocation = invocation(&["fork:deploy", "mainnet", "--tags", "Token", "--deploy"]);

    assert_eq!(invocation.env_value("HARDHAT_DEPLOY_FIXTURE"), None);
    assert_eq!(invocation.args, vec!["deploy", "--report-gas", "--tags", "Token", "--deploy"]);
}

#[test]
fn block_number_is_passed_as_given() {
    let invocation = invocation(&["fork:deploy", "mainnet", "--blockNumber", "0x10"]);

    assert_eq!(invocation.env_value("HARDHAT_FORK_NUMBER"), Some("0x10"));
}

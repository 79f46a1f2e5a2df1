//! Command line definition.

use crate::logging::LogArgs;
use alloy_primitives::B256;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trailhead_bootstrap::BootstrapArgs;
use trailhead_spec::{DEFAULT_DNS_PROTOCOL, MAINNET_GENESIS_HASH};

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "trailhead.toml";

/// Trailhead - where a fresh node finds its first peers
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Logging configuration (applies to all subcommands).
    #[command(flatten)]
    pub(crate) logs: LogArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Print the bootstrap plan: static nodes and DNS discovery roots.
    Plan(PlanArgs),
    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
    /// Print a static bootnode registry.
    Bootnodes(BootnodesArgs),
    /// Print the DNS discovery root for a genesis hash.
    DnsRoot(DnsRootArgs),
}

/// Arguments shared by commands that load a configuration.
#[derive(Debug, Args)]
pub(crate) struct ConfigArgs {
    /// Path to the configuration file (TOML). Ignored if missing.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub(crate) config: PathBuf,

    #[command(flatten)]
    pub(crate) bootstrap: BootstrapArgs,
}

#[derive(Debug, Args)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) config: ConfigArgs,

    /// Print the plan as JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Args)]
pub(crate) struct BootnodesArgs {
    /// Registry name (main, test, v5).
    #[arg(default_value = "main")]
    pub(crate) set: String,
}

#[derive(Debug, Args)]
pub(crate) struct DnsRootArgs {
    /// Genesis hash of the network.
    #[arg(long, default_value_t = MAINNET_GENESIS_HASH)]
    pub(crate) genesis: B256,

    /// Protocol tag of the node list.
    #[arg(long, default_value = DEFAULT_DNS_PROTOCOL)]
    pub(crate) protocol: String,
}

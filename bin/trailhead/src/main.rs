//! Trailhead bootstrap inspector.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre;
use tracing::debug;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(&cli.logs)?;

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting trailhead");

    match cli.command {
        Commands::Plan(args) => commands::plan(args)?,
        Commands::Config(args) => commands::config(args)?,
        Commands::Bootnodes(args) => commands::bootnodes(args)?,
        Commands::DnsRoot(args) => commands::dns_root(args),
    }

    Ok(())
}

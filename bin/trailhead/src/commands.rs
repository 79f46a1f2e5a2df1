//! Command implementations. Results go to stdout, diagnostics to the log.

use crate::cli::{BootnodesArgs, ConfigArgs, DnsRootArgs, PlanArgs};
use eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use trailhead_bootstrap::{BootstrapConfig, BootstrapPlan};
use trailhead_spec::{bootnodes as registry, dns_network_for_genesis, try_known_dns_network};

/// Load the configuration file and environment, then apply CLI overrides.
fn load_config(args: &ConfigArgs) -> Result<BootstrapConfig> {
    let mut config = BootstrapConfig::load(Some(args.config.as_path()))
        .wrap_err_with(|| format!("failed to load {}", args.config.display()))?;
    config.apply_args(&args.bootstrap);
    Ok(config)
}

pub(crate) fn plan(args: PlanArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let plan = BootstrapPlan::from_config(&config)?;

    if plan.is_empty() {
        warn!(network = %plan.network_name, "Bootstrap plan has no peer source");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("network: {}", plan.network_name);
    println!("genesis: {}", plan.genesis_hash);
    println!("static nodes ({}):", plan.static_nodes.len());
    for node in &plan.static_nodes {
        println!("  {node}");
    }
    println!("dns roots ({}):", plan.dns_roots.len());
    for root in &plan.dns_roots {
        println!("  {root}");
    }

    Ok(())
}

pub(crate) fn config(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub(crate) fn bootnodes(args: BootnodesArgs) -> Result<()> {
    let nodes = registry(&args.set)
        .ok_or_else(|| eyre!("unknown bootnode set '{}' (expected main, test or v5)", args.set))?;

    if nodes.is_empty() {
        info!(set = %args.set, "Bootnode set is empty");
    }
    for node in nodes {
        println!("{node}");
    }

    Ok(())
}

/// Prints the root, or nothing when the genesis has no DNS node list.
pub(crate) fn dns_root(args: DnsRootArgs) {
    match try_known_dns_network(args.genesis, &args.protocol) {
        Some(root) => {
            if let Some(network) = dns_network_for_genesis(&args.genesis) {
                info!(%network, protocol = %args.protocol, "Resolved DNS discovery root");
            }
            println!("{root}");
        }
        None => warn!(genesis = %args.genesis, "No DNS node list for genesis"),
    }
}

//! Bootstrap CLI arguments.

use clap::Args;
use std::path::PathBuf;
use trailhead_spec::KnownNetwork;

/// Parameters for choosing where the first peers come from.
///
/// Every field is an override: unset fields keep the value from the
/// configuration file, environment or defaults.
#[derive(Debug, Clone, Default, Args, PartialEq, Eq)]
#[command(next_help_heading = "Bootstrap")]
pub struct BootstrapArgs {
    /// Known network to join (mainnet, testnet).
    #[arg(long, value_name = "NETWORK", conflicts_with = "spec")]
    pub network: Option<KnownNetwork>,

    /// Path to a custom network spec (JSON) for private networks.
    #[arg(long, value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Comma separated enode URLs replacing the network's static bootnodes.
    ///
    /// --bootnodes enode://<id>@10.0.0.1:30303,enode://<id>@10.0.0.2:30303
    #[arg(long, value_delimiter = ',')]
    pub bootnodes: Vec<String>,

    /// Use the discovery v5 bootnodes instead of the v4 set.
    #[arg(long)]
    pub v5: bool,

    /// Disable DNS discovery; bootstrap from static nodes only.
    #[arg(long = "no-dns")]
    pub no_dns: bool,

    /// Protocol tag of the DNS node list (e.g. "all", "les").
    #[arg(long = "dns.protocol", value_name = "TAG")]
    pub dns_protocol: Option<String>,

    /// Comma separated enrtree:// links replacing the network's DNS root.
    #[arg(long = "dns.urls", value_delimiter = ',')]
    pub dns_urls: Vec<String>,
}

//! Bootstrap sources for known networks
//!
//! A freshly started node knows no peers. This crate answers where to look
//! for the first ones, before the node's own discovery protocol can take over:
//!
//! - **Static bootnodes**: fixed `enode://` lists per network, selected with
//!   [`BootnodeSet`] (`"main"`, `"test"`, and the reserved, empty `"v5"`).
//! - **DNS discovery roots**: the `enrtree://` link of a network's continuously
//!   updated node list, derived from its genesis hash by [`known_dns_network`].
//!
//! All tables are compiled in and immutable. Nothing here performs I/O; the
//! discovery engine resolves DNS names and dials nodes itself.
//!
//! # Example
//!
//! ```ignore
//! use trailhead_spec::{BootnodeSet, MAINNET_GENESIS_HASH, known_dns_network};
//!
//! let static_nodes = BootnodeSet::Main.records();
//! let root = known_dns_network(MAINNET_GENESIS_HASH, "all");
//! assert!(root.ends_with("@all.mainnet.ethdisco.net"));
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bootnodes;
mod constants;
mod dns;
mod error;
mod spec;

pub use bootnodes::{
    BootnodeSet, MAINNET_BOOTNODES, TESTNET_BOOTNODES, V5_BOOTNODES, bootnodes, mainnet_nodes,
    parse_nodes, testnet_nodes, v5_nodes,
};
pub use constants::*;
pub use dns::{
    KNOWN_DNS_NETWORKS, KnownNetwork, dns_network_for_genesis, known_dns_network,
    try_known_dns_network,
};
pub use error::NetworkSpecFileError;
pub use spec::{CUSTOM_NETWORK_NAME, MAINNET, NetworkSpec, NetworkSpecBuilder, TESTNET};

// Re-export codec types so callers need only this crate
pub use trailhead_net_dnsdisc::{LinkEntry, LinkParseError, ethdisco_root};
pub use trailhead_net_enode::{NodeHost, NodeRecord, NodeRecordParseError, PeerId};

use std::sync::Arc;

/// Initialize and return the mainnet specification.
///
/// This lazily initializes the mainnet spec on first call and returns
/// a clone of the Arc on subsequent calls.
pub fn init_mainnet() -> Arc<NetworkSpec> {
    spec::init_mainnet()
}

/// Initialize and return the testnet specification.
///
/// This lazily initializes the testnet spec on first call and returns
/// a clone of the Arc on subsequent calls.
pub fn init_testnet() -> Arc<NetworkSpec> {
    spec::init_testnet()
}

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use super::{
        BootnodeSet, KnownNetwork, NetworkSpec, NetworkSpecBuilder, NodeRecord, init_mainnet,
        init_testnet, known_dns_network,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_spec() {
        let spec = init_mainnet();
        assert!(spec.is_mainnet());
        assert_eq!(spec.genesis_hash, MAINNET_GENESIS_HASH);
    }

    #[test]
    fn test_testnet_spec() {
        let spec = init_testnet();
        assert!(spec.is_testnet());
        assert_eq!(spec.genesis_hash, TESTNET_GENESIS_HASH);
    }

    #[test]
    fn test_spec_bootnodes_match_registry() {
        let spec = init_mainnet();
        assert_eq!(spec.bootnode_records().unwrap(), mainnet_nodes());
    }
}

//! Genesis hash to DNS discovery root resolution.

use crate::{
    bootnodes::BootnodeSet,
    constants::{mainnet, testnet},
};
use alloy_primitives::B256;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use trailhead_net_dnsdisc::ethdisco_root;

/// A network with a public DNS node list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KnownNetwork {
    /// Ethereum mainnet.
    Mainnet,
    /// The public testnet served by the testnet bootnodes.
    Testnet,
}

impl KnownNetwork {
    /// Label of the network in DNS discovery domains.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => mainnet::NETWORK_NAME,
            Self::Testnet => testnet::NETWORK_NAME,
        }
    }

    /// Hash of the network's genesis block.
    pub const fn genesis_hash(self) -> B256 {
        match self {
            Self::Mainnet => mainnet::GENESIS_HASH,
            Self::Testnet => testnet::GENESIS_HASH,
        }
    }

    /// The static registry serving this network.
    pub const fn bootnode_set(self) -> BootnodeSet {
        match self {
            Self::Mainnet => BootnodeSet::Main,
            Self::Testnet => BootnodeSet::Test,
        }
    }
}

/// Genesis hashes with a DNS node list, and the network each one names.
pub const KNOWN_DNS_NETWORKS: [(B256, KnownNetwork); 2] = [
    (mainnet::GENESIS_HASH, KnownNetwork::Mainnet),
    (testnet::GENESIS_HASH, KnownNetwork::Testnet),
];

fn known_networks() -> &'static FxHashMap<B256, KnownNetwork> {
    static TABLE: OnceLock<FxHashMap<B256, KnownNetwork>> = OnceLock::new();
    TABLE.get_or_init(|| KNOWN_DNS_NETWORKS.into_iter().collect())
}

/// Looks up the network whose genesis block has the given hash.
pub fn dns_network_for_genesis(genesis: &B256) -> Option<KnownNetwork> {
    known_networks().get(genesis).copied()
}

/// Returns the DNS discovery root for `genesis`, or `None` for an unknown network.
///
/// `protocol` is inserted into the name as given.
pub fn try_known_dns_network(genesis: B256, protocol: &str) -> Option<String> {
    dns_network_for_genesis(&genesis).map(|network| ethdisco_root(protocol, network.name()))
}

/// Returns the DNS discovery root for `genesis`, or an empty string for an
/// unknown network.
///
/// An unknown genesis is the normal case for private networks, so it is not an
/// error: callers bootstrap from static nodes instead.
///
/// ```ignore
/// let root = known_dns_network(MAINNET_GENESIS_HASH, "all");
/// assert_eq!(
///     root,
///     "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@all.mainnet.ethdisco.net"
/// );
/// ```
pub fn known_dns_network(genesis: B256, protocol: &str) -> String {
    try_known_dns_network(genesis, protocol).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_covers_every_network() {
        assert_eq!(known_networks().len(), KNOWN_DNS_NETWORKS.len());
        for network in KnownNetwork::iter() {
            assert_eq!(dns_network_for_genesis(&network.genesis_hash()), Some(network));
        }
    }

    #[test]
    fn test_network_names() {
        assert_eq!(KnownNetwork::Mainnet.name(), "mainnet");
        assert_eq!(KnownNetwork::Testnet.name(), "testnet");
        for network in KnownNetwork::iter() {
            assert_eq!(network.to_string(), network.name());
        }
    }

    #[test]
    fn test_unknown_genesis() {
        assert_eq!(dns_network_for_genesis(&B256::ZERO), None);
        assert_eq!(try_known_dns_network(B256::ZERO, "all"), None);
        assert_eq!(known_dns_network(B256::ZERO, "all"), "");
    }

    #[test]
    fn test_protocol_passthrough() {
        let root = known_dns_network(mainnet::GENESIS_HASH, "les");
        assert!(root.ends_with("@les.mainnet.ethdisco.net"));

        let root = known_dns_network(testnet::GENESIS_HASH, "");
        assert!(root.ends_with("@.testnet.ethdisco.net"));
    }
}

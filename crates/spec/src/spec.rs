//! Concrete network specifications
//!
//! [`NetworkSpec`] bundles what a node needs to find its first peers: the
//! genesis hash that identifies the network and the static bootnodes.
//! Pre-built specifications are available via [`init_mainnet`] and
//! [`init_testnet`]. Private networks are described with
//! [`NetworkSpecBuilder`] or loaded from JSON with [`NetworkSpec::from_file`].

use crate::{
    bootnodes::V5_BOOTNODES,
    constants::{mainnet, testnet},
    dns::{KnownNetwork, dns_network_for_genesis, try_known_dns_network},
    error::NetworkSpecFileError,
};
use alloy_primitives::B256;
use std::{
    path::Path,
    sync::{Arc, OnceLock},
};
use trailhead_net_enode::{NodeRecord, NodeRecordParseError};

/// Network name used by the builder when none is given.
pub const CUSTOM_NETWORK_NAME: &str = "custom";

/// A network specification.
///
/// Two nodes with the same genesis hash join the same network. The bootnode
/// lists are entry points only; they carry no authority over the network.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NetworkSpec {
    /// Network name (e.g., "mainnet", "testnet")
    pub network_name: String,

    /// Hash of the genesis block
    pub genesis_hash: B256,

    /// Bootnodes for discovery v4 (as enode URLs).
    ///
    /// Consumers should parse these with [`NetworkSpec::bootnode_records`].
    #[serde(default)]
    pub bootnodes: Vec<String>,

    /// Bootnodes for discovery v5 (as enode URLs).
    #[serde(default)]
    pub v5_bootnodes: Vec<String>,
}

/// The mainnet specification
pub static MAINNET: OnceLock<Arc<NetworkSpec>> = OnceLock::new();

/// Initialize the mainnet specification
pub(crate) fn init_mainnet() -> Arc<NetworkSpec> {
    MAINNET
        .get_or_init(|| Arc::new(NetworkSpec::known(KnownNetwork::Mainnet)))
        .clone()
}

/// The testnet specification
pub static TESTNET: OnceLock<Arc<NetworkSpec>> = OnceLock::new();

/// Initialize the testnet specification
pub(crate) fn init_testnet() -> Arc<NetworkSpec> {
    TESTNET
        .get_or_init(|| Arc::new(NetworkSpec::known(KnownNetwork::Testnet)))
        .clone()
}

impl NetworkSpec {
    fn known(network: KnownNetwork) -> Self {
        Self {
            network_name: network.name().to_string(),
            genesis_hash: network.genesis_hash(),
            bootnodes: to_strings(network.bootnode_set().raw()),
            v5_bootnodes: to_strings(V5_BOOTNODES),
        }
    }

    /// Returns the spec of a known network.
    pub fn for_network(network: KnownNetwork) -> Arc<Self> {
        match network {
            KnownNetwork::Mainnet => init_mainnet(),
            KnownNetwork::Testnet => init_testnet(),
        }
    }

    /// Returns the known network this spec's genesis hash belongs to.
    pub fn known_network(&self) -> Option<KnownNetwork> {
        dns_network_for_genesis(&self.genesis_hash)
    }

    /// Returns true if this is the mainnet genesis.
    pub fn is_mainnet(&self) -> bool {
        self.genesis_hash == mainnet::GENESIS_HASH
    }

    /// Returns true if this is the testnet genesis.
    pub fn is_testnet(&self) -> bool {
        self.genesis_hash == testnet::GENESIS_HASH
    }

    /// Returns the DNS discovery root for `protocol`, if the genesis hash
    /// belongs to a network with a public node list.
    pub fn dns_root(&self, protocol: &str) -> Option<String> {
        try_known_dns_network(self.genesis_hash, protocol)
    }

    /// Parses the discovery v4 bootnodes.
    pub fn bootnode_records(&self) -> Result<Vec<NodeRecord>, NodeRecordParseError> {
        self.bootnodes.iter().map(|node| node.parse()).collect()
    }

    /// Load a NetworkSpec from a JSON file.
    ///
    /// Example file:
    /// ```json
    /// {
    ///   "network_name": "local-devnet",
    ///   "genesis_hash": "0x5c0b8a3f6c1d4e1e9e7a8a1d6f2b1c9e3d4a5b6c7d8e9f0a1b2c3d4e5f6a7b8c",
    ///   "bootnodes": ["enode://…@127.0.0.1:30303"]
    /// }
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, NetworkSpecFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a NetworkSpec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkSpecFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this NetworkSpec to a JSON string.
    pub fn to_json(&self) -> Result<String, NetworkSpecFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write this NetworkSpec to a JSON file.
    pub fn to_file(&self, path: &Path) -> Result<(), NetworkSpecFileError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn to_strings(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|node| node.to_string()).collect()
}

/// Builder for constructing custom [`NetworkSpec`]s.
///
/// Start from scratch with [`NetworkSpecBuilder::new()`], or derive from a
/// known network with [`NetworkSpecBuilder::mainnet()`] or
/// [`NetworkSpecBuilder::testnet()`] and override specific fields.
#[derive(Debug, Default, Clone)]
pub struct NetworkSpecBuilder {
    network_name: Option<String>,
    genesis_hash: Option<B256>,
    bootnodes: Vec<String>,
    v5_bootnodes: Vec<String>,
}

impl NetworkSpecBuilder {
    /// Create a new specification builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network name
    pub fn network_name(mut self, name: impl ToString) -> Self {
        self.network_name = Some(name.to_string());
        self
    }

    /// Set the genesis hash
    pub fn genesis_hash(mut self, hash: B256) -> Self {
        self.genesis_hash = Some(hash);
        self
    }

    /// Add a bootnode (as an enode URL).
    pub fn add_bootnode(mut self, node: impl ToString) -> Self {
        self.bootnodes.push(node.to_string());
        self
    }

    /// Set multiple bootnodes (as enode URLs).
    pub fn bootnodes(mut self, nodes: Vec<String>) -> Self {
        self.bootnodes = nodes;
        self
    }

    /// Set the discovery v5 bootnodes.
    pub fn v5_bootnodes(mut self, nodes: Vec<String>) -> Self {
        self.v5_bootnodes = nodes;
        self
    }

    /// Build the specification
    pub fn build(self) -> NetworkSpec {
        let genesis_hash = self.genesis_hash.unwrap_or_default();

        // Name after the known network if the genesis matches one
        let network_name = self.network_name.unwrap_or_else(|| {
            dns_network_for_genesis(&genesis_hash)
                .map_or(CUSTOM_NETWORK_NAME, KnownNetwork::name)
                .to_string()
        });

        NetworkSpec {
            network_name,
            genesis_hash,
            bootnodes: self.bootnodes,
            v5_bootnodes: self.v5_bootnodes,
        }
    }

    /// Create a builder initialized with mainnet settings
    pub fn mainnet() -> Self {
        Self::from_spec(&init_mainnet())
    }

    /// Create a builder initialized with testnet settings
    pub fn testnet() -> Self {
        Self::from_spec(&init_testnet())
    }

    fn from_spec(spec: &NetworkSpec) -> Self {
        Self {
            network_name: Some(spec.network_name.clone()),
            genesis_hash: Some(spec.genesis_hash),
            bootnodes: spec.bootnodes.clone(),
            v5_bootnodes: spec.v5_bootnodes.clone(),
        }
    }
}

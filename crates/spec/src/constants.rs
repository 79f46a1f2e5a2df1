//! Constants identifying the known networks.
//!
//! A network is identified by the hash of its genesis block. Only the
//! networks listed here have a public DNS node list; any other genesis hash
//! (private chains, devnets) is bootstrapped from static nodes alone.

use alloy_primitives::{B256, b256};

/// Mainnet constants
pub mod mainnet {
    use super::*;

    /// Mainnet network name, as used in DNS discovery domains
    pub const NETWORK_NAME: &str = "mainnet";

    /// Mainnet genesis block hash
    pub const GENESIS_HASH: B256 =
        b256!("d4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3");
}

/// Testnet constants
pub mod testnet {
    use super::*;

    /// Testnet network name, as used in DNS discovery domains
    pub const NETWORK_NAME: &str = "testnet";

    /// Testnet genesis block hash
    pub const GENESIS_HASH: B256 =
        b256!("41941023680923e0fe4d74a34bdac8141f2540e3ae90623718e47d66d1ca4a2d");
}

/// Genesis hash of mainnet.
pub const MAINNET_GENESIS_HASH: B256 = mainnet::GENESIS_HASH;

/// Genesis hash of testnet.
pub const TESTNET_GENESIS_HASH: B256 = testnet::GENESIS_HASH;

/// Protocol tag selecting the node list of all protocol variants.
pub const DEFAULT_DNS_PROTOCOL: &str = "all";

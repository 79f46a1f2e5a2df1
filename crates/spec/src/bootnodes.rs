//! Static bootnode registries.
//!
//! Each registry is a fixed list of `enode://` URLs compiled into the binary.
//! Changing a list takes a new release; there is no runtime API for it.

use std::sync::OnceLock;
use tracing::warn;
use trailhead_net_enode::NodeRecord;

/// Mainnet bootnodes.
pub const MAINNET_BOOTNODES: &[&str] = &[
    "enode://d860a01f9722d78051619d1e2351aba3f43f943f6f00718d1b9baa4101932a1f5011f16bb2b1bb35db20d6fe28fa0bf09636d26a87d31de9ec6203eeedb1f666@18.138.108.67:30303", // ap-southeast-1
    "enode://22a8232c3abc76a16ae9d6c3b164f98775fe226f0917b0ca871128a74a8e9630b458460865bab457221f1d448dd9791d24c4e5d88786180ac185df813a68d4de@3.209.45.79:30303", // us-east-1
    "enode://ca6de62fce278f96aea6ec5a2daadb877e51651247cb96ee310a318def462913b653963c155a0ef6c7d50048bba6e6cea881130857413d9f50a621546b590758@34.255.23.113:30303", // eu-west-1
    "enode://279944d8dcd428dffaa7436f25ca0ca43ae19e7bcf94a8fb7d1641651f92d121e972ac2e8f381414b80cc8e5555811c2ec6e1a99bb009b3f53c4c69923e11bd8@35.158.244.151:30303", // eu-central-1
    "enode://8499da03c47d637b20eee24eec3c356c9a2e6148d6fe25ca195c7949ab8ec2c03e3556126b0d7ed644675e78c4318b08691b7b57de10e5f0d40d05b09238fa0a@52.187.207.27:30303", // australiaeast
];

/// Testnet bootnodes.
pub const TESTNET_BOOTNODES: &[&str] = &[
    "enode://30b7ab30a01c124a6cceca36863ece12c4f5fa68e3ba9b0b51407ccc002eeed3b3102d20a88f1c1d3c3154e2449317b8ef95090e77b312d5cc39354f86d5d606@52.176.7.10:30303",
    "enode://865a63255b3bb68023b6bffd5095118fcc13e79dcf014fe4e47e065c350c7cc72af2e53eff895f11ba1bbb6a2b33271c1116ee870f266618eadfc2e78aa7349c@52.176.100.77:30303",
    "enode://6332792c4a00e3e4ee0926ed89e0d27ef985424d97b6a45bf0f23e51f0dcb5e66b875777506458aea7af6f9e4ffb69f43f3778ee73c81ed9d34c51c4b16b0b0f@52.232.243.152:30303",
    "enode://94c15d1b9e2fe7ce56e458b9a3b672ef11894ddedd0c6f247e0f1d3487f52b66208fb4aeb8179fce6e3a749ea93ed147c37976d67af557508d199d9594c35f09@192.81.208.223:30303",
];

/// Bootnodes for the next discovery protocol version.
///
/// Reserved; empty until the v5 bootnodes are deployed.
pub const V5_BOOTNODES: &[&str] = &[];

/// Selects one of the static registries.
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
pub enum BootnodeSet {
    /// `"main"`
    Main,
    /// `"test"`
    Test,
    /// `"v5"`
    V5,
}

impl BootnodeSet {
    /// Returns the raw `enode://` URLs of this set.
    pub const fn raw(self) -> &'static [&'static str] {
        match self {
            Self::Main => MAINNET_BOOTNODES,
            Self::Test => TESTNET_BOOTNODES,
            Self::V5 => V5_BOOTNODES,
        }
    }

    /// Returns the parsed records of this set, parsing on first access.
    pub fn records(self) -> &'static [NodeRecord] {
        static MAIN: OnceLock<Vec<NodeRecord>> = OnceLock::new();
        static TEST: OnceLock<Vec<NodeRecord>> = OnceLock::new();
        static V5: OnceLock<Vec<NodeRecord>> = OnceLock::new();

        let cell = match self {
            Self::Main => &MAIN,
            Self::Test => &TEST,
            Self::V5 => &V5,
        };
        cell.get_or_init(|| parse_nodes(self.raw()))
    }
}

/// Returns the registry with the given name (`"main"`, `"test"` or `"v5"`).
pub fn bootnodes(name: &str) -> Option<&'static [&'static str]> {
    name.parse::<BootnodeSet>().ok().map(BootnodeSet::raw)
}

/// Returns parsed mainnet nodes
pub fn mainnet_nodes() -> &'static [NodeRecord] {
    BootnodeSet::Main.records()
}

/// Returns parsed testnet nodes
pub fn testnet_nodes() -> &'static [NodeRecord] {
    BootnodeSet::Test.records()
}

/// Returns parsed v5 nodes
pub fn v5_nodes() -> &'static [NodeRecord] {
    BootnodeSet::V5.records()
}

/// Parses node URLs, skipping entries that fail to parse.
pub fn parse_nodes(nodes: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<NodeRecord> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let node = node.as_ref();
            match node.parse() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(node = %node, error = %e, "Skipping malformed bootnode");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_set_names() {
        assert_eq!(BootnodeSet::Main.to_string(), "main");
        assert_eq!(BootnodeSet::Test.to_string(), "test");
        assert_eq!(BootnodeSet::V5.to_string(), "v5");

        for set in BootnodeSet::iter() {
            assert_eq!(set.to_string().parse::<BootnodeSet>().unwrap(), set);
        }
    }

    #[test]
    fn test_bootnodes_by_name() {
        assert_eq!(bootnodes("main"), Some(MAINNET_BOOTNODES));
        assert_eq!(bootnodes("test"), Some(TESTNET_BOOTNODES));
        assert_eq!(bootnodes("v5"), Some(V5_BOOTNODES));
        assert_eq!(bootnodes("mainnet"), None);
        assert_eq!(bootnodes(""), None);
    }

    #[test]
    fn test_records_are_cached() {
        let first = BootnodeSet::Main.records();
        let second = BootnodeSet::Main.records();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_parse_nodes_skips_malformed() {
        let nodes = [MAINNET_BOOTNODES[0], "enode://nope@1.2.3.4:30303", "garbage"];
        let parsed = parse_nodes(nodes);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].to_string(), MAINNET_BOOTNODES[0]);
    }
}

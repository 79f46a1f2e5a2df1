//! Peer sources handed to the discovery engine.

use crate::{
    config::BootstrapConfig,
    error::{BootstrapError, BootstrapResult},
};
use alloy_primitives::B256;
use serde::Serialize;
use tracing::{debug, info};
use trailhead_spec::{LinkEntry, NetworkSpec, NodeRecord};

/// Where a node finds its first peers.
///
/// The discovery engine dials `static_nodes` directly and walks the DNS trees
/// named by `dns_roots`. Either list may be empty; both empty means the node
/// has no way into the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapPlan {
    /// Network the plan was built for.
    pub network_name: String,
    /// Genesis hash of that network.
    pub genesis_hash: B256,
    /// Nodes to contact directly.
    pub static_nodes: Vec<NodeRecord>,
    /// DNS node lists to walk.
    pub dns_roots: Vec<LinkEntry>,
}

impl BootstrapPlan {
    /// Builds the plan for the network selected by `config`.
    pub fn from_config(config: &BootstrapConfig) -> BootstrapResult<Self> {
        let spec = config.network_spec()?;
        Self::for_spec(&spec, config)
    }

    /// Builds the plan for `spec`, applying the overrides in `config`.
    ///
    /// Invalid user-supplied bootnodes or links are errors. A genesis hash
    /// without a DNS node list is not: the plan just carries no DNS root.
    pub fn for_spec(spec: &NetworkSpec, config: &BootstrapConfig) -> BootstrapResult<Self> {
        let static_nodes = if !config.bootnodes.is_empty() {
            parse_bootnodes(&config.bootnodes)?
        } else if config.v5 {
            parse_bootnodes(&spec.v5_bootnodes)?
        } else {
            parse_bootnodes(&spec.bootnodes)?
        };

        let dns_roots = if !config.dns_discovery {
            debug!(network = %spec.network_name, "DNS discovery disabled");
            Vec::new()
        } else if !config.dns_urls.is_empty() {
            parse_links(&config.dns_urls)?
        } else {
            match spec.dns_root(&config.dns_protocol) {
                Some(root) => parse_links([root])?,
                None => {
                    debug!(
                        network = %spec.network_name,
                        genesis = %spec.genesis_hash,
                        "No DNS node list for genesis, using static bootnodes only"
                    );
                    Vec::new()
                }
            }
        };

        info!(
            network = %spec.network_name,
            static_nodes = static_nodes.len(),
            dns_roots = dns_roots.len(),
            "Bootstrap plan ready"
        );

        Ok(Self {
            network_name: spec.network_name.clone(),
            genesis_hash: spec.genesis_hash,
            static_nodes,
            dns_roots,
        })
    }

    /// Returns true if the plan names no peer source at all.
    pub fn is_empty(&self) -> bool {
        self.static_nodes.is_empty() && self.dns_roots.is_empty()
    }
}

fn parse_bootnodes(nodes: &[String]) -> BootstrapResult<Vec<NodeRecord>> {
    nodes
        .iter()
        .map(|node| {
            node.parse()
                .map_err(|source| BootstrapError::InvalidBootnode {
                    node: node.clone(),
                    source,
                })
        })
        .collect()
}

fn parse_links(
    links: impl IntoIterator<Item = impl AsRef<str>>,
) -> BootstrapResult<Vec<LinkEntry>> {
    links
        .into_iter()
        .map(|link| {
            let link = link.as_ref();
            link.parse()
                .map_err(|source| BootstrapError::InvalidDnsLink {
                    link: link.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use trailhead_spec::{
        KnownNetwork, MAINNET_BOOTNODES, NetworkSpecBuilder, NodeRecordParseError,
        TESTNET_BOOTNODES, init_mainnet,
    };

    #[test]
    fn test_mainnet_plan() {
        let plan = BootstrapPlan::from_config(&BootstrapConfig::default()).unwrap();

        assert_eq!(plan.network_name, "mainnet");
        assert_eq!(plan.static_nodes.len(), MAINNET_BOOTNODES.len());
        assert_eq!(plan.dns_roots.len(), 1);
        assert_eq!(
            plan.dns_roots[0].to_string(),
            "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@all.mainnet.ethdisco.net"
        );
    }

    #[test]
    fn test_testnet_plan_with_protocol() {
        let config = BootstrapConfig {
            network: KnownNetwork::Testnet,
            dns_protocol: "les".to_string(),
            ..Default::default()
        };
        let plan = BootstrapPlan::from_config(&config).unwrap();

        assert_eq!(plan.static_nodes.len(), TESTNET_BOOTNODES.len());
        assert_eq!(plan.dns_roots[0].domain, "les.testnet.ethdisco.net");
    }

    #[test]
    fn test_unknown_genesis_falls_back_to_static() {
        let spec = NetworkSpecBuilder::new()
            .network_name("devnet")
            .add_bootnode(MAINNET_BOOTNODES[0])
            .build();
        let plan = BootstrapPlan::for_spec(&spec, &BootstrapConfig::default()).unwrap();

        assert_eq!(plan.static_nodes.len(), 1);
        assert!(plan.dns_roots.is_empty());
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_v5_plan_is_empty() {
        let config = BootstrapConfig {
            v5: true,
            dns_discovery: false,
            ..Default::default()
        };
        let plan = BootstrapPlan::for_spec(&init_mainnet(), &config).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_v5_selects_spec_v5_set() {
        let spec = NetworkSpecBuilder::new()
            .add_bootnode(MAINNET_BOOTNODES[0])
            .v5_bootnodes(vec![TESTNET_BOOTNODES[1].to_string()])
            .build();
        let config = BootstrapConfig {
            v5: true,
            ..Default::default()
        };
        let plan = BootstrapPlan::for_spec(&spec, &config).unwrap();

        assert_eq!(plan.static_nodes.len(), 1);
        assert_eq!(plan.static_nodes[0].to_string(), TESTNET_BOOTNODES[1]);

        let spec = NetworkSpecBuilder::new()
            .v5_bootnodes(vec!["enode://bad".to_string()])
            .build();
        assert_matches!(
            BootstrapPlan::for_spec(&spec, &config),
            Err(BootstrapError::InvalidBootnode { node, .. }) if node == "enode://bad"
        );
    }

    #[test]
    fn test_overrides() {
        let link = "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@nodes.example.org";
        let config = BootstrapConfig {
            bootnodes: vec![TESTNET_BOOTNODES[0].to_string()],
            dns_urls: vec![link.to_string()],
            ..Default::default()
        };
        let plan = BootstrapPlan::from_config(&config).unwrap();

        assert_eq!(plan.network_name, "mainnet");
        assert_eq!(plan.static_nodes.len(), 1);
        assert_eq!(plan.static_nodes[0].to_string(), TESTNET_BOOTNODES[0]);
        assert_eq!(plan.dns_roots.len(), 1);
        assert_eq!(plan.dns_roots[0].domain, "nodes.example.org");
    }

    #[test]
    fn test_invalid_overrides() {
        let config = BootstrapConfig {
            bootnodes: vec!["enode://short@1.2.3.4:30303".to_string()],
            ..Default::default()
        };
        assert_matches!(
            BootstrapPlan::from_config(&config),
            Err(BootstrapError::InvalidBootnode {
                source: NodeRecordParseError::InvalidIdLength { .. },
                ..
            })
        );

        let config = BootstrapConfig {
            dns_urls: vec!["https://example.org".to_string()],
            ..Default::default()
        };
        assert_matches!(
            BootstrapPlan::from_config(&config),
            Err(BootstrapError::InvalidDnsLink { link, .. }) if link == "https://example.org"
        );
    }
}

//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments (applied after Figment load)
//! 2. Config file (TOML)
//! 3. Environment variables (`TRAILHEAD_` prefix)
//! 4. Defaults

use crate::{
    args::BootstrapArgs,
    error::{BootstrapError, BootstrapResult},
};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};
use serde_with::{PickFirst, StringWithSeparator, formats::CommaSeparator, serde_as};
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use trailhead_spec::{DEFAULT_DNS_PROTOCOL, KnownNetwork, NetworkSpec};

/// Prefix of environment variables read by [`BootstrapConfig::load`].
pub const ENV_PREFIX: &str = "TRAILHEAD_";

/// Bootstrap configuration.
///
/// List fields accept a sequence or a single comma separated string, so
/// `TRAILHEAD_BOOTNODES=enode://..,enode://..` reads the same as the
/// `--bootnodes` flag.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Known network to join when no spec file is set.
    pub network: KnownNetwork,

    /// Custom network spec, replacing `network`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_file: Option<PathBuf>,

    /// Bootnodes replacing the spec's static set (as enode URLs).
    #[serde_as(as = "PickFirst<(_, StringWithSeparator::<CommaSeparator, String>)>")]
    pub bootnodes: Vec<String>,

    /// Use the spec's discovery v5 bootnodes.
    pub v5: bool,

    /// Whether to look up the network's DNS node list.
    pub dns_discovery: bool,

    /// Protocol tag inserted into the DNS discovery root.
    #[serde(deserialize_with = "scalar_string")]
    pub dns_protocol: String,

    /// DNS discovery links replacing the network's root (as enrtree URLs).
    #[serde_as(as = "PickFirst<(_, StringWithSeparator::<CommaSeparator, String>)>")]
    pub dns_urls: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            network: KnownNetwork::Mainnet,
            spec_file: None,
            bootnodes: Vec::new(),
            v5: false,
            dns_discovery: true,
            dns_protocol: DEFAULT_DNS_PROTOCOL.to_string(),
            dns_urls: Vec::new(),
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from defaults, environment, and config file.
    /// CLI overrides should be applied separately after loading.
    pub fn load(config_path: Option<&Path>) -> BootstrapResult<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.extract().map_err(|e| BootstrapError::Config(Box::new(e)))
    }

    /// Apply CLI overrides.
    pub fn apply_args(&mut self, args: &BootstrapArgs) {
        if let Some(network) = args.network {
            self.network = network;
            self.spec_file = None;
        }
        if let Some(spec) = &args.spec {
            self.spec_file = Some(spec.clone());
        }
        if !args.bootnodes.is_empty() {
            self.bootnodes = args.bootnodes.clone();
        }
        if args.v5 {
            self.v5 = true;
        }
        if args.no_dns {
            self.dns_discovery = false;
        }
        if let Some(protocol) = &args.dns_protocol {
            self.dns_protocol = protocol.clone();
        }
        if !args.dns_urls.is_empty() {
            self.dns_urls = args.dns_urls.clone();
        }
    }

    /// Returns the network spec this configuration selects.
    pub fn network_spec(&self) -> BootstrapResult<Arc<NetworkSpec>> {
        match &self.spec_file {
            Some(path) => NetworkSpec::from_file(path)
                .map(Arc::new)
                .map_err(|source| BootstrapError::SpecFile {
                    path: path.clone(),
                    source,
                }),
            None => Ok(NetworkSpec::for_network(self.network)),
        }
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> BootstrapResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Reads any scalar as its text. The environment provider types values that
/// look like numbers or booleans, but a protocol tag is always text.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct ScalarString;

    impl Visitor<'_> for ScalarString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or scalar")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarString)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.network, KnownNetwork::Mainnet);
        assert!(config.dns_discovery);
        assert_eq!(config.dns_protocol, "all");
        assert!(config.bootnodes.is_empty());
    }

    #[test]
    fn test_apply_args() {
        let mut config = BootstrapConfig {
            spec_file: Some(PathBuf::from("devnet.json")),
            ..Default::default()
        };

        config.apply_args(&BootstrapArgs {
            network: Some(KnownNetwork::Testnet),
            no_dns: true,
            dns_protocol: Some("les".to_string()),
            ..Default::default()
        });

        assert_eq!(config.network, KnownNetwork::Testnet);
        assert_eq!(config.spec_file, None);
        assert!(!config.dns_discovery);
        assert_eq!(config.dns_protocol, "les");
    }

    #[test]
    fn test_empty_args_change_nothing() {
        let mut config = BootstrapConfig::default();
        config.apply_args(&BootstrapArgs::default());
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BootstrapConfig {
            network: KnownNetwork::Testnet,
            v5: true,
            ..Default::default()
        };

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("network = \"testnet\""));
        assert!(!rendered.contains("spec_file"));

        let parsed: BootstrapConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_scalar_protocol_and_comma_lists() {
        let link = "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@a.example.org";
        let parsed: BootstrapConfig = toml::from_str(&format!(
            "dns_protocol = 5\ndns_urls = \"{link},{link}\"\nbootnodes = [\"x\"]\n"
        ))
        .unwrap();

        assert_eq!(parsed.dns_protocol, "5");
        assert_eq!(parsed.dns_urls, vec![link.to_string(), link.to_string()]);
        assert_eq!(parsed.bootnodes, vec!["x".to_string()]);
    }

    #[test]
    fn test_network_spec_selection() {
        let config = BootstrapConfig::default();
        assert!(config.network_spec().unwrap().is_mainnet());

        let config = BootstrapConfig {
            spec_file: Some(PathBuf::from("/nonexistent/devnet.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.network_spec(),
            Err(BootstrapError::SpecFile { .. })
        ));
    }
}

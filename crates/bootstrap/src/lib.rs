//! Bootstrap configuration and planning.
//!
//! Combines a [`BootstrapConfig`] with the network's spec into a
//! [`BootstrapPlan`]: the static nodes and DNS discovery roots the discovery
//! engine starts from.
//!
//! Configuration is loaded using Figment with the following priority
//! (highest wins):
//!
//! 1. CLI arguments ([`BootstrapArgs`])
//! 2. Config file (TOML)
//! 3. Environment variables (`TRAILHEAD_` prefix)
//! 4. Defaults

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod args;
mod config;
mod error;
mod plan;

pub use args::BootstrapArgs;
pub use config::{BootstrapConfig, ENV_PREFIX};
pub use error::{BootstrapError, BootstrapResult};
pub use plan::BootstrapPlan;

//! `enrtree://` links for DNS-based node discovery (EIP-1459).
//!
//! A network publishes its current node list as a Merkle tree of DNS TXT
//! records. Clients find the tree through a link naming the signing key and
//! the domain:
//!
//! ```text
//! enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@all.mainnet.ethdisco.net
//! ```
//!
//! This crate only builds and parses links. Querying the TXT records and
//! walking the tree is left to the discovery engine.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod link;

pub use link::{LinkEntry, LinkParseError, is_enrtree};

/// URL scheme of a tree link.
pub const ENRTREE_SCHEME: &str = "enrtree";

/// Key that signs the trees published under [`ETHDISCO_DOMAIN`].
pub const ETHDISCO_PUBLIC_KEY: &str = "AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE";

/// Delegation domain of the public node lists.
pub const ETHDISCO_DOMAIN: &str = "ethdisco.net";

/// Everything in an ethdisco link before the protocol tag.
pub const DNS_ROOT_PREFIX: &str = "enrtree://AKA3AM6LPBYEUDMVNU3BSVQJ5AD45Y7YPOHJLEF6W26QOE4VTUDPE@";

/// Builds the ethdisco link for `protocol` on `network`.
///
/// Produces `enrtree://<key>@<protocol>.<network>.ethdisco.net`. Neither
/// argument is validated; a tag that is not a DNS label yields a name that
/// fails later at resolution time.
pub fn ethdisco_root(protocol: &str, network: &str) -> String {
    format!("{DNS_ROOT_PREFIX}{protocol}.{network}.{ETHDISCO_DOMAIN}")
}

//! Peer endpoint identifiers for Ethereum-style devp2p networks.
//!
//! A bootnode is published as an `enode://` URL:
//!
//! ```text
//! enode://<128 hex chars>@<host>:<port>[?discport=<udp port>]
//! ```
//!
//! The hex string is the node's uncompressed secp256k1 public key (64 bytes,
//! without the `0x04` prefix). The host is an IPv4 address, a hostname, or a
//! bracketed IPv6 address. The port is used for both TCP and UDP unless a
//! `discport` query names a separate discovery port.
//!
//! # Core Types
//!
//! - [`NodeRecord`] - Parsed identifier, emits the same text it was parsed from
//! - [`NodeHost`] - IP address or hostname part of a record
//! - [`PeerId`] - The 64-byte public key identifying a node
//!
//! # Example
//!
//! ```ignore
//! use trailhead_net_enode::NodeRecord;
//!
//! let record: NodeRecord = "enode://d860…f666@18.138.108.67:30303".parse()?;
//! assert_eq!(record.tcp_port, 30303);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod record;

pub use error::NodeRecordParseError;
pub use record::{ENODE_SCHEME, NodeHost, NodeRecord, PEER_ID_HEX_LEN};

/// Alias for a peer identifier.
///
/// The secp256k1 public key of a node, without the SEC1 tag byte.
pub type PeerId = alloy_primitives::B512;

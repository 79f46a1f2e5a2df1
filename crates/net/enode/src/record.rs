use crate::{NodeRecordParseError, PeerId};
use alloy_primitives::hex;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    str::FromStr,
};

/// URL scheme of a node record.
pub const ENODE_SCHEME: &str = "enode";

/// Number of hex characters in an encoded [`PeerId`].
pub const PEER_ID_HEX_LEN: usize = 128;

const DISCPORT_QUERY: &str = "discport=";
const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Network location of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeHost {
    /// Literal IPv4 or IPv6 address.
    Ip(IpAddr),
    /// DNS hostname, resolved by whoever dials the node.
    Domain(String),
}

impl NodeHost {
    /// Returns the IP address if the host is a literal address.
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ip(ip) => Some(*ip),
            Self::Domain(_) => None,
        }
    }

    fn parse(host: &str) -> Result<Self, NodeRecordParseError> {
        if host.is_empty() {
            return Err(NodeRecordParseError::MissingHost);
        }
        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Ok(Self::Ip(IpAddr::V4(ip)));
        }
        if is_valid_hostname(host) {
            Ok(Self::Domain(host.to_string()))
        } else {
            Err(NodeRecordParseError::InvalidHost(host.to_string()))
        }
    }
}

impl fmt::Display for NodeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ip(IpAddr::V4(ip)) => write!(f, "{ip}"),
            Self::Ip(IpAddr::V6(ip)) => write!(f, "[{ip}]"),
            Self::Domain(domain) => f.write_str(domain),
        }
    }
}

impl From<IpAddr> for NodeHost {
    fn from(ip: IpAddr) -> Self {
        Self::Ip(ip)
    }
}

/// A peer endpoint identifier: public key plus dialable address.
///
/// Parsing accepts hex digits in either case; [`Display`](fmt::Display) always
/// emits lowercase, so well-formed registry entries re-emit byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct NodeRecord {
    /// Public key of the node.
    pub id: PeerId,
    /// Address or hostname of the node.
    pub host: NodeHost,
    /// RLPx (TCP) port.
    pub tcp_port: u16,
    /// Discovery (UDP) port.
    pub udp_port: u16,
}

impl NodeRecord {
    /// Creates a record using the same port for TCP and UDP.
    pub fn new(addr: SocketAddr, id: PeerId) -> Self {
        Self {
            id,
            host: NodeHost::Ip(addr.ip()),
            tcp_port: addr.port(),
            udp_port: addr.port(),
        }
    }

    /// Sets a separate discovery port.
    pub fn with_udp_port(mut self, port: u16) -> Self {
        self.udp_port = port;
        self
    }

    /// TCP socket address, if the host is a literal IP.
    pub fn tcp_addr(&self) -> Option<SocketAddr> {
        self.host.ip().map(|ip| SocketAddr::new(ip, self.tcp_port))
    }

    /// UDP socket address, if the host is a literal IP.
    pub fn udp_addr(&self) -> Option<SocketAddr> {
        self.host.ip().map(|ip| SocketAddr::new(ip, self.udp_port))
    }
}

impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ENODE_SCHEME}://{}@{}:{}",
            hex::encode(self.id),
            self.host,
            self.tcp_port
        )?;
        if self.udp_port != self.tcp_port {
            write!(f, "?{DISCPORT_QUERY}{}", self.udp_port)?;
        }
        Ok(())
    }
}

impl FromStr for NodeRecord {
    type Err = NodeRecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = s
            .split_once("://")
            .ok_or(NodeRecordParseError::MissingScheme)?;
        if scheme != ENODE_SCHEME {
            return Err(NodeRecordParseError::UnsupportedScheme(scheme.to_string()));
        }

        let (id, address) = rest
            .split_once('@')
            .ok_or(NodeRecordParseError::MissingAddress)?;
        let id = parse_peer_id(id)?;

        let (address, query) = match address.split_once('?') {
            Some((address, query)) => (address, Some(query)),
            None => (address, None),
        };

        let (host, port) = split_host_port(address)?;
        let tcp_port = parse_port(port)?;
        let udp_port = match query {
            Some(query) => {
                let port = query
                    .strip_prefix(DISCPORT_QUERY)
                    .ok_or_else(|| NodeRecordParseError::UnsupportedQuery(query.to_string()))?;
                parse_port(port)?
            }
            None => tcp_port,
        };

        Ok(Self { id, host, tcp_port, udp_port })
    }
}

fn parse_peer_id(id: &str) -> Result<PeerId, NodeRecordParseError> {
    if id.len() != PEER_ID_HEX_LEN {
        return Err(NodeRecordParseError::InvalidIdLength {
            expected: PEER_ID_HEX_LEN,
            actual: id.len(),
        });
    }
    PeerId::from_str(id).map_err(|_| NodeRecordParseError::InvalidIdHex)
}

/// Splits `host:port`, keeping the brackets of an IPv6 literal out of the host.
fn split_host_port(address: &str) -> Result<(NodeHost, &str), NodeRecordParseError> {
    if let Some(rest) = address.strip_prefix('[') {
        let (ip, port) = rest
            .split_once("]:")
            .ok_or_else(|| NodeRecordParseError::InvalidHost(address.to_string()))?;
        let ip = ip
            .parse::<Ipv6Addr>()
            .map_err(|_| NodeRecordParseError::InvalidHost(ip.to_string()))?;
        return Ok((NodeHost::Ip(IpAddr::V6(ip)), port));
    }

    let (host, port) = address
        .rsplit_once(':')
        .ok_or(NodeRecordParseError::MissingPort)?;
    // IPv6 literals must be bracketed
    if host.contains(':') {
        return Err(NodeRecordParseError::InvalidHost(host.to_string()));
    }
    Ok((NodeHost::parse(host)?, port))
}

fn parse_port(port: &str) -> Result<u16, NodeRecordParseError> {
    if port.is_empty() {
        return Err(NodeRecordParseError::MissingPort);
    }
    let invalid = || NodeRecordParseError::InvalidPort(port.to_string());
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(port) => Ok(port),
    }
}

/// RFC 1123 hostname. The top-level label may not be all-numeric, so a
/// malformed dotted quad is never taken for a name.
fn is_valid_hostname(host: &str) -> bool {
    host.len() <= MAX_HOSTNAME_LEN
        && host
            .rsplit('.')
            .next()
            .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

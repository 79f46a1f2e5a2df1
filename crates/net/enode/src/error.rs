//! Error types for node record parsing.

/// Errors from parsing an `enode://` URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeRecordParseError {
    /// The input has no `scheme://` prefix.
    #[error("missing scheme separator `://`")]
    MissingScheme,

    /// The scheme is something other than `enode`.
    #[error("unsupported scheme `{0}`, expected `enode`")]
    UnsupportedScheme(String),

    /// No `@` between the node id and the address.
    #[error("missing `@` between node id and address")]
    MissingAddress,

    /// The node id has the wrong number of characters.
    #[error("node id must be {expected} hex characters, got {actual}")]
    InvalidIdLength {
        /// Required length, [`PEER_ID_HEX_LEN`](crate::PEER_ID_HEX_LEN).
        expected: usize,
        /// Length of the input.
        actual: usize,
    },

    /// The node id contains non-hex characters.
    #[error("node id is not valid hex")]
    InvalidIdHex,

    /// The host part is empty.
    #[error("missing host")]
    MissingHost,

    /// The host is neither an IP address nor a valid hostname.
    #[error("invalid host `{0}`")]
    InvalidHost(String),

    /// No `:port` after the host.
    #[error("missing port")]
    MissingPort,

    /// The port is not a number in 1..=65535.
    #[error("invalid port `{0}`")]
    InvalidPort(String),

    /// A query other than `discport=<port>`.
    #[error("unsupported query `{0}`")]
    UnsupportedQuery(String),
}

//! Bootstrap error types.

use std::path::PathBuf;
use trailhead_spec::{LinkParseError, NetworkSpecFileError, NodeRecordParseError};

/// Errors that can occur while assembling a bootstrap plan.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Configuration could not be extracted from its sources.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration could not be rendered as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A custom network spec file could not be read.
    #[error("failed to load network spec {}: {source}", path.display())]
    SpecFile {
        /// Path of the spec file.
        path: PathBuf,
        /// Underlying read or parse error.
        #[source]
        source: NetworkSpecFileError,
    },

    /// A bootnode is not a valid enode URL.
    #[error("invalid bootnode `{node}`: {source}")]
    InvalidBootnode {
        /// The rejected URL.
        node: String,
        /// Why it was rejected.
        #[source]
        source: NodeRecordParseError,
    },

    /// A DNS discovery link is not a valid enrtree URL.
    #[error("invalid DNS discovery link `{link}`: {source}")]
    InvalidDnsLink {
        /// The rejected link.
        link: String,
        /// Why it was rejected.
        #[source]
        source: LinkParseError,
    },
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

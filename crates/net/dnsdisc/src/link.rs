use crate::ENRTREE_SCHEME;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt, str::FromStr};

/// Errors from parsing an `enrtree://` link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkParseError {
    /// The input does not start with `enrtree://`.
    #[error("link must start with `enrtree://`")]
    MissingScheme,

    /// No `@` between the key and the domain.
    #[error("missing `@` between public key and domain")]
    MissingDomain,

    /// The key is empty or uses characters outside the base32 alphabet.
    #[error("public key `{0}` is not base32")]
    InvalidPublicKey(String),

    /// Nothing follows the `@`.
    #[error("empty domain")]
    EmptyDomain,
}

/// A pointer to a node tree: signing key plus the domain of the tree root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct LinkEntry {
    /// Base32 (unpadded) compressed public key authorizing the tree.
    pub public_key: String,
    /// Domain holding the root TXT record.
    pub domain: String,
}

impl LinkEntry {
    /// Creates a link without validating either part.
    pub fn new(public_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            domain: domain.into(),
        }
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ENRTREE_SCHEME}://{}@{}", self.public_key, self.domain)
    }
}

impl FromStr for LinkEntry {
    type Err = LinkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(ENRTREE_SCHEME)
            .and_then(|rest| rest.strip_prefix("://"))
            .ok_or(LinkParseError::MissingScheme)?;

        let (public_key, domain) = rest.split_once('@').ok_or(LinkParseError::MissingDomain)?;

        if public_key.is_empty() || !public_key.bytes().all(is_base32) {
            return Err(LinkParseError::InvalidPublicKey(public_key.to_string()));
        }
        if domain.is_empty() {
            return Err(LinkParseError::EmptyDomain);
        }

        Ok(Self::new(public_key, domain))
    }
}

/// Check if a string looks like an `enrtree://` link.
pub fn is_enrtree(s: &str) -> bool {
    s.strip_prefix(ENRTREE_SCHEME)
        .is_some_and(|rest| rest.starts_with("://"))
}

// RFC 4648 alphabet, upper case only.
fn is_base32(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'2'..=b'7')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ETHDISCO_PUBLIC_KEY;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_and_display() {
        let s = format!("enrtree://{ETHDISCO_PUBLIC_KEY}@nodes.example.org");
        let link: LinkEntry = s.parse().unwrap();

        assert_eq!(link.public_key, ETHDISCO_PUBLIC_KEY);
        assert_eq!(link.domain, "nodes.example.org");
        assert_eq!(link.to_string(), s);
    }

    #[test]
    fn test_parse_errors() {
        assert_matches!(
            "enode://abc@host".parse::<LinkEntry>(),
            Err(LinkParseError::MissingScheme)
        );
        assert_matches!(
            "enrtree:/KEY@host".parse::<LinkEntry>(),
            Err(LinkParseError::MissingScheme)
        );
        assert_matches!(
            "enrtree://AKA3AM6L".parse::<LinkEntry>(),
            Err(LinkParseError::MissingDomain)
        );
        assert_matches!(
            "enrtree://@host".parse::<LinkEntry>(),
            Err(LinkParseError::InvalidPublicKey(_))
        );
        assert_matches!(
            "enrtree://aka3am6l@host".parse::<LinkEntry>(),
            Err(LinkParseError::InvalidPublicKey(key)) if key == "aka3am6l"
        );
        assert_matches!(
            "enrtree://AKA3AM6L@".parse::<LinkEntry>(),
            Err(LinkParseError::EmptyDomain)
        );
    }

    #[test]
    fn test_is_enrtree() {
        assert!(is_enrtree("enrtree://KEY@example.org"));
        assert!(!is_enrtree("enode://abcd@1.2.3.4:30303"));
        assert!(!is_enrtree("enrtree:KEY@example.org"));
    }
}

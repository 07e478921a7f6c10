//! What the cjdns daemon reports about itself.

use crate::Error;

/// A cjdns node's self-reported peering information.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    /// The node's IPv6 address within the cjdns network.
    pub address: String,

    /// The node's public key.
    pub public_key: String,

    /// The UDP port the node listens for peers on.
    pub port: u16
}

/// Render a port for display.
#[must_use]
pub fn port_to_text(port: u16) -> String {
    port.to_string()
}

/// Parse a displayed port.
///
/// # Errors
///
/// [`Error::InvalidPort`] if text is not a base-10 integer between 0 and 65535 (inclusive).
pub fn port_from_text(text: &str) -> Result<u16, Error> {
    text.parse().map_err(|_| Error::InvalidPort(text.to_string()))
}

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// Fixed placeholder substituted for a secret wherever one would otherwise be
/// printed. Constant length regardless of the underlying value, so output
/// leaks neither the secret nor its size.
pub const SECRET_MASK: &str = "**********";

/// A sensitive string (API key, AD token) that masks itself in any generic
/// textual output.
///
/// The raw value is stored in a [`SecretString`] and comes back out only
/// through [`reveal`](Self::reveal). `Display`, `Debug` and `Serialize` all
/// emit [`SECRET_MASK`] instead, so a configuration struct holding a
/// `SecretValue` can derive its representations without scrubbing anything at
/// the call site.
///
/// # Example
///
/// ```
/// use openai_client_config::SecretValue;
///
/// let key = SecretValue::new("sk-1234567890");
/// assert_eq!(format!("{key}"), "**********");
/// assert_eq!(key.reveal(), "sk-1234567890");
/// ```
#[derive(Clone)]
pub struct SecretValue(SecretString);

impl SecretValue {
    /// Wraps `raw` verbatim. Empty strings are allowed; whether a field may
    /// be empty is decided by the configuration object that binds it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Returns the wrapped value, byte-for-byte.
    ///
    /// This is the only path that exposes the original string. Callers that
    /// place the credential into an outbound request use this; everything
    /// else goes through the masked renderings.
    pub fn reveal(&self) -> &str {
        self.0.expose_secret()
    }

    /// The mask used for any textual rendering of the value.
    pub fn render(&self) -> &'static str {
        SECRET_MASK
    }
}

impl fmt::Display for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl From<String> for SecretValue {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SecretValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// Serialization goes through the mask as well, so deriving `Serialize` on a
// struct with `SecretValue` fields cannot leak. There is deliberately no
// `Deserialize`: configurations are built through their builders, which run
// the resolution pass exactly once.
impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.render())
    }
}

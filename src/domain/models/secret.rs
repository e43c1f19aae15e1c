use std::fmt;

const MASK: &str = "**********";

/// String value that is masked by `Display` and `Debug`.
///
/// The raw text is only reachable through [`SecretString::expose_secret`],
/// so formatting a config (or logging it) never leaks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a raw value
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw, unmasked value
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Whether the wrapped value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretString").field(&MASK).finish()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// A caller principal as verified by the host (e.g. a signer address).
///
/// Identities are opaque: the core only compares them. Construction rejects
/// strings that could never have come from a signer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub fn new(principal: impl Into<String>) -> Result<Self, IdentityError> {
        let principal = principal.into();
        if principal.is_empty() {
            return Err(IdentityError::Empty);
        }
        if principal.chars().any(char::is_whitespace) {
            return Err(IdentityError::Whitespace(principal));
        }
        Ok(Identity(principal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identity::new(value)
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The host's logical clock (block height). Non-decreasing, never set by the
/// core.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Height(pub u64);

impl Height {
    pub fn value(self) -> u64 {
        self.0
    }

    /// The height `blocks` later, saturating at `u64::MAX`.
    pub fn after(self, blocks: u64) -> Height {
        Height(self.0.saturating_add(blocks))
    }
}

impl From<u64> for Height {
    fn from(h: u64) -> Self {
        Height(h)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

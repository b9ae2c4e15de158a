use crate::identity::{Height, Identity};

/// Numeric code for [`RegistryError::Unauthorized`].
pub const ERR_UNAUTHORIZED: u32 = 100;
/// Numeric code for [`RegistryError::InvalidExpiration`].
pub const ERR_INVALID_EXPIRATION: u32 = 101;
/// Numeric code for [`RegistryError::NotFound`].
pub const ERR_NOT_FOUND: u32 = 102;

/// All errors a registry operation can return.
///
/// Every variant leaves registry state untouched. The numeric codes are part
/// of the external contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The caller lacks the privilege the operation requires (admin, or
    /// admin-or-certifier for revocation).
    #[error("caller {caller} is not authorized")]
    Unauthorized { caller: Identity },

    /// The supplied expiration is at or before the current height.
    #[error("expiration {expires_at} is not after current height {clock}")]
    InvalidExpiration { expires_at: Height, clock: Height },

    /// The operation targets a record that does not exist.
    #[error("record not found: {key}")]
    NotFound { key: String },
}

impl RegistryError {
    /// The stable numeric code reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized { .. } => ERR_UNAUTHORIZED,
            RegistryError::InvalidExpiration { .. } => ERR_INVALID_EXPIRATION,
            RegistryError::NotFound { .. } => ERR_NOT_FOUND,
        }
    }
}

/// A principal string that cannot name a caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("principal must not be empty")]
    Empty,
    #[error("principal must not contain whitespace: {0:?}")]
    Whitespace(String),
}

//! Validity policy: pure functions of the clock and a record's validity
//! fields.
//!
//! Two boundary conventions live here and they differ on purpose:
//!
//! - Expiry is exclusive. A record expiring at `E` is in force for clocks
//!   strictly below `E`; `E` itself is the first invalid height. Creation
//!   likewise requires `E > clock`.
//! - Maintenance due dates are inclusive. A record due at `D` is due for
//!   every clock `>= D`, including `D`.

use crate::error::RegistryError;
use crate::identity::Height;

/// The validity-bearing fields of a stored record.
pub trait Validity {
    /// Height from which the record is no longer valid, if it expires at all.
    fn expires_at(&self) -> Option<Height>;
    /// Whether the record has been explicitly invalidated.
    fn is_revoked(&self) -> bool;
}

/// Whether a record with this expiration may be created at `clock`.
pub fn can_create(clock: Height, expires_at: Option<Height>) -> bool {
    match expires_at {
        None => true,
        Some(expires_at) => expires_at > clock,
    }
}

/// [`can_create`] as a result, for use with `?` ahead of any write.
pub fn check_expiration(clock: Height, expires_at: Option<Height>) -> Result<(), RegistryError> {
    match expires_at {
        Some(expires_at) if !can_create(clock, Some(expires_at)) => {
            Err(RegistryError::InvalidExpiration { expires_at, clock })
        }
        _ => Ok(()),
    }
}

/// Whether `record` is currently in force: not revoked and not yet expired.
pub fn is_in_force<R: Validity + ?Sized>(clock: Height, record: &R) -> bool {
    if record.is_revoked() {
        return false;
    }
    match record.expires_at() {
        None => true,
        Some(expires_at) => clock < expires_at,
    }
}

/// Whether maintenance scheduled for `due` is due at `clock`.
pub fn is_due(clock: Height, due: Height) -> bool {
    clock >= due
}

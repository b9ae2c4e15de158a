use equipreg_core::{Height, Identity, Validity};
use serde::{Deserialize, Serialize};

/// An expiring, revocable attestation with a domain payload.
///
/// Used for both operator qualifications and equipment certifications. The
/// payload is flattened into the record when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate<P> {
    /// Principal that created the record. Never changes.
    pub certified_by: Identity,
    /// Height at creation. Never changes.
    pub certified_at: Height,
    /// First height at which the record is no longer in force.
    pub expires_at: Height,
    /// Set once by a revocation, never cleared.
    pub revoked: bool,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Certificate<P> {
    pub fn issue(certified_by: Identity, certified_at: Height, expires_at: Height, payload: P) -> Self {
        Certificate {
            certified_by,
            certified_at,
            expires_at,
            revoked: false,
            payload,
        }
    }

    /// The same record with `revoked` set. Every other field is carried over.
    pub fn into_revoked(self) -> Self {
        Certificate {
            revoked: true,
            ..self
        }
    }
}

impl<P> Validity for Certificate<P> {
    fn expires_at(&self) -> Option<Height> {
        Some(self.expires_at)
    }

    fn is_revoked(&self) -> bool {
        self.revoked
    }
}

/// A single maintenance event. Maintenance records never expire and are
/// never revoked; they only carry a due height for the next service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub performed_by: Identity,
    pub performed_at: Height,
    pub maintenance_type: String,
    pub description: String,
    pub next_maintenance_due: Height,
}

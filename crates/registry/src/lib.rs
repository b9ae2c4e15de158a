//! Equipment lifecycle registries.
//!
//! Four independent registries built from the same parts: an
//! [`AccessController`](equipreg_core::AccessController), a
//! [`RecordStore`](equipreg_storage::RecordStore), and the
//! [`validity`](equipreg_core::validity) policy.
//!
//! - [`MaintenanceHistory`] -- append-only, auto-numbered maintenance events
//!   with an inclusive due height
//! - [`ManufacturerVerification`] -- admin-managed set of verified
//!   manufacturers
//! - [`OperatorTraining`] -- expiring, revocable operator qualifications
//! - [`TestingCertification`] -- expiring, revocable equipment certifications
//!
//! The last two are configurations of the generic [`ValidityRegistry`].

pub mod certification;
pub mod keys;
pub mod maintenance;
pub mod manufacturer;
pub mod training;
pub mod validity_registry;

use std::fmt;
use std::str::FromStr;

use equipreg_core::{AccessController, Environment, Identity, RegistryError};

pub use certification::{EquipmentCertification, StandardCertification, TestingCertification};
pub use keys::{CertificationKey, MaintenanceKey, QualificationKey};
pub use maintenance::MaintenanceHistory;
pub use manufacturer::ManufacturerVerification;
pub use training::{OperatorTraining, Qualification, TrainingDetails};
pub use validity_registry::ValidityRegistry;

/// The four registry deployments, by their public contract name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistryKind {
    MaintenanceHistory,
    ManufacturerVerification,
    OperatorTraining,
    TestingCertification,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 4] = [
        RegistryKind::MaintenanceHistory,
        RegistryKind::ManufacturerVerification,
        RegistryKind::OperatorTraining,
        RegistryKind::TestingCertification,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RegistryKind::MaintenanceHistory => "maintenance-history",
            RegistryKind::ManufacturerVerification => "manufacturer-verification",
            RegistryKind::OperatorTraining => "operator-training",
            RegistryKind::TestingCertification => "testing-certification",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegistryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegistryKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown registry '{}'", s))
    }
}

/// Admin surface shared by every registry.
pub trait Administered {
    fn access(&self) -> &AccessController;
    fn access_mut(&mut self) -> &mut AccessController;

    fn admin(&self) -> &Identity {
        self.access().admin()
    }

    /// Hand the admin role to `new_admin`. Only the current admin may call
    /// this.
    fn transfer_admin(
        &mut self,
        env: &impl Environment,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.access_mut().transfer_admin(env.caller(), new_admin)
    }
}

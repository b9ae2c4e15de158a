//! Testing certification registry: equipment certified against a standard
//! until an expiration height.

use equipreg_core::{AccessController, Environment, Height, Identity, RegistryError};
use equipreg_storage::Certificate;
use serde::{Deserialize, Serialize};

use crate::keys::CertificationKey;
use crate::validity_registry::ValidityRegistry;
use crate::{Administered, RegistryKind};

/// Equipment certifications carry no fields beyond the certificate itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardCertification {}

pub type EquipmentCertification = Certificate<StandardCertification>;

pub struct TestingCertification {
    inner: ValidityRegistry<CertificationKey, StandardCertification>,
}

impl TestingCertification {
    pub fn new(deployer: Identity) -> Self {
        TestingCertification {
            inner: ValidityRegistry::new(RegistryKind::TestingCertification.name(), deployer),
        }
    }

    /// `certify-equipment`: any caller may certify; `expires_at` must be
    /// after the current height.
    pub fn certify_equipment(
        &mut self,
        env: &impl Environment,
        equipment_id: &str,
        standard_id: &str,
        expires_at: Height,
    ) -> Result<(), RegistryError> {
        self.inner.certify(
            env,
            CertificationKey::new(equipment_id, standard_id),
            expires_at,
            StandardCertification {},
        )
    }

    /// `revoke-certification`: admin or the original certifier.
    pub fn revoke_certification(
        &mut self,
        env: &impl Environment,
        equipment_id: &str,
        standard_id: &str,
    ) -> Result<(), RegistryError> {
        self.inner
            .revoke(env, &CertificationKey::new(equipment_id, standard_id))
    }

    pub fn is_certified(&self, clock: Height, equipment_id: &str, standard_id: &str) -> bool {
        self.inner
            .is_in_force(clock, &CertificationKey::new(equipment_id, standard_id))
    }

    pub fn get_certification(
        &self,
        equipment_id: &str,
        standard_id: &str,
    ) -> Option<EquipmentCertification> {
        self.inner
            .get(&CertificationKey::new(equipment_id, standard_id))
    }
}

impl Administered for TestingCertification {
    fn access(&self) -> &AccessController {
        self.inner.access()
    }

    fn access_mut(&mut self) -> &mut AccessController {
        self.inner.access_mut()
    }
}

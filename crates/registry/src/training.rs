//! Operator training registry: an operator's qualification on an equipment
//! type, at a training level, until an expiration height.

use equipreg_core::{AccessController, Environment, Height, Identity, RegistryError};
use equipreg_storage::Certificate;
use serde::{Deserialize, Serialize};

use crate::keys::QualificationKey;
use crate::validity_registry::ValidityRegistry;
use crate::{Administered, RegistryKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDetails {
    pub training_level: u32,
}

pub type Qualification = Certificate<TrainingDetails>;

pub struct OperatorTraining {
    inner: ValidityRegistry<QualificationKey, TrainingDetails>,
}

impl OperatorTraining {
    pub fn new(deployer: Identity) -> Self {
        OperatorTraining {
            inner: ValidityRegistry::new(RegistryKind::OperatorTraining.name(), deployer),
        }
    }

    /// `certify-operator`: any caller may record a qualification.
    pub fn certify_operator(
        &mut self,
        env: &impl Environment,
        operator: Identity,
        equipment_type: &str,
        training_level: u32,
        expires_at: Height,
    ) -> Result<(), RegistryError> {
        self.inner.certify(
            env,
            QualificationKey::new(operator, equipment_type),
            expires_at,
            TrainingDetails { training_level },
        )
    }

    /// `revoke-qualification`: admin or the original certifier.
    pub fn revoke_qualification(
        &mut self,
        env: &impl Environment,
        operator: &Identity,
        equipment_type: &str,
    ) -> Result<(), RegistryError> {
        self.inner
            .revoke(env, &QualificationKey::new(operator.clone(), equipment_type))
    }

    pub fn is_qualified(&self, clock: Height, operator: &Identity, equipment_type: &str) -> bool {
        self.inner
            .is_in_force(clock, &QualificationKey::new(operator.clone(), equipment_type))
    }

    pub fn get_qualification(
        &self,
        operator: &Identity,
        equipment_type: &str,
    ) -> Option<Qualification> {
        self.inner
            .get(&QualificationKey::new(operator.clone(), equipment_type))
    }
}

impl Administered for OperatorTraining {
    fn access(&self) -> &AccessController {
        self.inner.access()
    }

    fn access_mut(&mut self) -> &mut AccessController {
        self.inner.access_mut()
    }
}

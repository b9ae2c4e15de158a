//! Manufacturer verification registry: an admin-curated set of verified
//! manufacturer principals. Removal deletes the entry outright.

use equipreg_core::{AccessController, Environment, Identity, RegistryError};
use equipreg_storage::{MemoryStore, RecordStore};

use crate::{Administered, RegistryKind};

pub struct ManufacturerVerification<S = MemoryStore<Identity, bool>> {
    access: AccessController,
    store: S,
}

impl ManufacturerVerification {
    pub fn new(deployer: Identity) -> Self {
        Self::with_store(deployer, MemoryStore::new())
    }
}

impl<S> ManufacturerVerification<S>
where
    S: RecordStore<Identity, bool>,
{
    pub fn with_store(deployer: Identity, store: S) -> Self {
        ManufacturerVerification {
            access: AccessController::new(deployer),
            store,
        }
    }

    /// `add-manufacturer`: admin only. Adding an already verified
    /// manufacturer succeeds.
    pub fn add_manufacturer(
        &mut self,
        env: &impl Environment,
        manufacturer: Identity,
    ) -> Result<(), RegistryError> {
        self.access.require_admin(env.caller())?;
        tracing::debug!(
            registry = RegistryKind::ManufacturerVerification.name(),
            %manufacturer,
            "manufacturer verified"
        );
        self.store.put(manufacturer, true);
        Ok(())
    }

    /// `remove-manufacturer`: admin only. Removing an unknown manufacturer
    /// succeeds and changes nothing.
    pub fn remove_manufacturer(
        &mut self,
        env: &impl Environment,
        manufacturer: &Identity,
    ) -> Result<(), RegistryError> {
        self.access.require_admin(env.caller())?;
        let existed = self.store.remove(manufacturer).is_some();
        tracing::debug!(
            registry = RegistryKind::ManufacturerVerification.name(),
            %manufacturer,
            existed,
            "manufacturer removed"
        );
        Ok(())
    }

    pub fn is_verified_manufacturer(&self, manufacturer: &Identity) -> bool {
        self.store.get(manufacturer).unwrap_or(false)
    }

    /// All verified manufacturers in principal order.
    pub fn verified(&self) -> Vec<Identity> {
        self.store
            .entries()
            .into_iter()
            .filter(|(_, verified)| *verified)
            .map(|(manufacturer, _)| manufacturer)
            .collect()
    }
}

impl<S> Administered for ManufacturerVerification<S> {
    fn access(&self) -> &AccessController {
        &self.access
    }

    fn access_mut(&mut self) -> &mut AccessController {
        &mut self.access
    }
}

//! Single-administrator access control.
//!
//! A registry has exactly one admin at all times. The admin is fixed at
//! deployment and can only be changed by the current admin; there is no
//! recovery path if the admin key is lost.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::identity::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessController {
    admin: Identity,
}

impl AccessController {
    /// Create a controller whose admin is the deploying principal.
    pub fn new(deployer: Identity) -> Self {
        AccessController { admin: deployer }
    }

    pub fn admin(&self) -> &Identity {
        &self.admin
    }

    pub fn is_admin(&self, caller: &Identity) -> bool {
        &self.admin == caller
    }

    pub fn require_admin(&self, caller: &Identity) -> Result<(), RegistryError> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Hand the admin role to `new_admin`. Only the current admin may do this;
    /// the previous admin loses every privilege as soon as this returns.
    pub fn transfer_admin(
        &mut self,
        caller: &Identity,
        new_admin: Identity,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;
        tracing::info!(from = %self.admin, to = %new_admin, "admin transferred");
        self.admin = new_admin;
        Ok(())
    }
}

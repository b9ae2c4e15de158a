//! Generic store of expiring, revocable certificates.
//!
//! Operator training and equipment certification differ only in their key
//! and payload; both are a `ValidityRegistry`. The operations are:
//!
//! 1. `certify` -- any caller; the expiration must be strictly after the
//!    current height. Re-certifying an existing key overwrites it.
//! 2. `revoke` -- the record must exist (checked first), then the caller
//!    must be the admin or the original certifier.
//! 3. `is_in_force` -- read-only, absent records are simply not in force.

use std::fmt;
use std::marker::PhantomData;

use equipreg_core::validity::{self, check_expiration};
use equipreg_core::{AccessController, Environment, Height, Identity, RegistryError};
use equipreg_storage::{Certificate, MemoryStore, RecordStore};

use crate::Administered;

pub struct ValidityRegistry<K, P, S = MemoryStore<K, Certificate<P>>> {
    name: &'static str,
    access: AccessController,
    store: S,
    _marker: PhantomData<fn() -> (K, P)>,
}

impl<K, P> ValidityRegistry<K, P>
where
    K: Ord + Clone + fmt::Display,
    P: Clone,
{
    /// An empty in-memory registry administered by `deployer`.
    pub fn new(name: &'static str, deployer: Identity) -> Self {
        Self::with_store(name, deployer, MemoryStore::new())
    }
}

impl<K, P, S> ValidityRegistry<K, P, S>
where
    K: Clone + fmt::Display,
    P: Clone,
    S: RecordStore<K, Certificate<P>>,
{
    pub fn with_store(name: &'static str, deployer: Identity, store: S) -> Self {
        ValidityRegistry {
            name,
            access: AccessController::new(deployer),
            store,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Issue (or reissue) the certificate stored under `key`.
    ///
    /// The caller becomes the certifier and the current height the
    /// certification height. Fails with `InvalidExpiration` when
    /// `expires_at` is not strictly after the current height; nothing is
    /// stored in that case.
    pub fn certify(
        &mut self,
        env: &impl Environment,
        key: K,
        expires_at: Height,
        payload: P,
    ) -> Result<(), RegistryError> {
        let clock = env.clock();
        if let Err(e) = check_expiration(clock, Some(expires_at)) {
            tracing::debug!(registry = self.name, %key, %expires_at, %clock, "certification rejected");
            return Err(e);
        }

        let certificate = Certificate::issue(env.caller().clone(), clock, expires_at, payload);
        let replaced = self.store.put(key.clone(), certificate).is_some();
        tracing::debug!(
            registry = self.name,
            %key,
            certifier = %env.caller(),
            %expires_at,
            replaced,
            "certificate issued"
        );
        Ok(())
    }

    /// Mark the certificate under `key` as revoked.
    ///
    /// Revoking an already revoked certificate succeeds and changes nothing.
    pub fn revoke(&mut self, env: &impl Environment, key: &K) -> Result<(), RegistryError> {
        let certificate = self
            .store
            .get(key)
            .ok_or_else(|| RegistryError::NotFound {
                key: key.to_string(),
            })?;

        let caller = env.caller();
        if !self.access.is_admin(caller) && &certificate.certified_by != caller {
            tracing::debug!(registry = self.name, %key, %caller, "revocation rejected");
            return Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            });
        }

        self.store.put(key.clone(), certificate.into_revoked());
        tracing::debug!(registry = self.name, %key, %caller, "certificate revoked");
        Ok(())
    }

    pub fn get(&self, key: &K) -> Option<Certificate<P>> {
        self.store.get(key)
    }

    /// Whether the certificate under `key` exists, is not revoked, and has
    /// not reached its expiration height at `clock`.
    pub fn is_in_force(&self, clock: Height, key: &K) -> bool {
        self.store
            .get(key)
            .is_some_and(|certificate| validity::is_in_force(clock, &certificate))
    }

    /// Number of stored certificates, revoked and expired ones included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<K, P, S> Administered for ValidityRegistry<K, P, S> {
    fn access(&self) -> &AccessController {
        &self.access
    }

    fn access_mut(&mut self) -> &mut AccessController {
        &mut self.access
    }
}

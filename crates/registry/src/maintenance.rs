//! Maintenance history registry.
//!
//! Any caller may log a maintenance event. Each event gets the next number
//! from a registry-wide counter, so events are never overwritten, and the
//! numbers are shared across all equipment.

use equipreg_core::validity;
use equipreg_core::{AccessController, Environment, Height, Identity};
use equipreg_storage::{MaintenanceRecord, MemoryStore, RecordCounter, RecordStore};

use crate::keys::MaintenanceKey;
use crate::{Administered, RegistryKind};

pub struct MaintenanceHistory<S = MemoryStore<MaintenanceKey, MaintenanceRecord>> {
    access: AccessController,
    store: S,
    counter: RecordCounter,
}

impl MaintenanceHistory {
    pub fn new(deployer: Identity) -> Self {
        Self::with_store(deployer, MemoryStore::new())
    }
}

impl<S> MaintenanceHistory<S>
where
    S: RecordStore<MaintenanceKey, MaintenanceRecord>,
{
    pub fn with_store(deployer: Identity, store: S) -> Self {
        MaintenanceHistory {
            access: AccessController::new(deployer),
            store,
            counter: RecordCounter::new(),
        }
    }

    /// `add-maintenance-record`: log an event performed by the caller at the
    /// current height. Returns the allocated record number.
    pub fn add_record(
        &mut self,
        env: &impl Environment,
        equipment_id: &str,
        maintenance_type: &str,
        description: &str,
        next_maintenance_due: Height,
    ) -> u64 {
        let record_id = self.counter.next_id();
        let key = MaintenanceKey::new(equipment_id, record_id);
        let record = MaintenanceRecord {
            performed_by: env.caller().clone(),
            performed_at: env.clock(),
            maintenance_type: maintenance_type.to_string(),
            description: description.to_string(),
            next_maintenance_due,
        };
        tracing::debug!(
            registry = RegistryKind::MaintenanceHistory.name(),
            %key,
            technician = %env.caller(),
            %next_maintenance_due,
            "maintenance recorded"
        );
        self.store.put(key, record);
        record_id
    }

    pub fn get_record(&self, equipment_id: &str, record_id: u64) -> Option<MaintenanceRecord> {
        self.store.get(&MaintenanceKey::new(equipment_id, record_id))
    }

    /// `is-maintenance-due`: the due height itself counts as due. Unknown
    /// records are never due.
    pub fn is_maintenance_due(&self, clock: Height, equipment_id: &str, record_id: u64) -> bool {
        self.get_record(equipment_id, record_id)
            .is_some_and(|record| validity::is_due(clock, record.next_maintenance_due))
    }

    /// The last allocated record number (0 before the first event).
    pub fn record_counter(&self) -> u64 {
        self.counter.current()
    }

    /// Every event logged for `equipment_id`, oldest first.
    pub fn history(&self, equipment_id: &str) -> Vec<(u64, MaintenanceRecord)> {
        self.store
            .entries()
            .into_iter()
            .filter(|(key, _)| key.equipment_id == equipment_id)
            .map(|(key, record)| (key.record_id, record))
            .collect()
    }
}

impl<S> Administered for MaintenanceHistory<S> {
    fn access(&self) -> &AccessController {
        &self.access
    }

    fn access_mut(&mut self) -> &mut AccessController {
        &mut self.access
    }
}

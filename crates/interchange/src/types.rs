//! Typed calls for each registry and the response shapes they produce.

use equipreg_core::{Height, Identity, RegistryError};
use equipreg_registry::RegistryKind;
use serde_json::{json, Value};

/// Admin calls every registry accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCall {
    /// `transfer-admin(new-admin)`
    TransferAdmin { new_admin: Identity },
    /// `get-admin()`
    GetAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceCall {
    /// `add-maintenance-record(equipment-id, maintenance-type, description, next-maintenance-due)`
    AddRecord {
        equipment_id: String,
        maintenance_type: String,
        description: String,
        next_maintenance_due: Height,
    },
    /// `get-maintenance-record(equipment-id, record-id)`
    GetRecord { equipment_id: String, record_id: u64 },
    /// `is-maintenance-due(equipment-id, record-id)`
    IsDue { equipment_id: String, record_id: u64 },
    /// `get-record-counter()`
    GetRecordCounter,
    /// `get-maintenance-history(equipment-id)`
    GetHistory { equipment_id: String },
    Admin(AdminCall),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManufacturerCall {
    /// `add-manufacturer(manufacturer)`
    Add { manufacturer: Identity },
    /// `remove-manufacturer(manufacturer)`
    Remove { manufacturer: Identity },
    /// `is-verified-manufacturer(manufacturer)`
    IsVerified { manufacturer: Identity },
    Admin(AdminCall),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingCall {
    /// `certify-operator(operator, equipment-type, training-level, expiration)`
    CertifyOperator {
        operator: Identity,
        equipment_type: String,
        training_level: u32,
        expires_at: Height,
    },
    /// `revoke-qualification(operator, equipment-type)`
    Revoke {
        operator: Identity,
        equipment_type: String,
    },
    /// `is-qualified(operator, equipment-type)`
    IsQualified {
        operator: Identity,
        equipment_type: String,
    },
    /// `get-qualification(operator, equipment-type)`
    GetQualification {
        operator: Identity,
        equipment_type: String,
    },
    Admin(AdminCall),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificationCall {
    /// `certify-equipment(equipment-id, standard-id, expiration)`
    CertifyEquipment {
        equipment_id: String,
        standard_id: String,
        expires_at: Height,
    },
    /// `revoke-certification(equipment-id, standard-id)`
    Revoke {
        equipment_id: String,
        standard_id: String,
    },
    /// `is-certified(equipment-id, standard-id)`
    IsCertified {
        equipment_id: String,
        standard_id: String,
    },
    /// `get-certification(equipment-id, standard-id)`
    GetCertification {
        equipment_id: String,
        standard_id: String,
    },
    Admin(AdminCall),
}

/// A decoded call, routed to exactly one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Maintenance(MaintenanceCall),
    Manufacturer(ManufacturerCall),
    Training(TrainingCall),
    Certification(CertificationCall),
}

impl Call {
    pub fn registry(&self) -> RegistryKind {
        match self {
            Call::Maintenance(_) => RegistryKind::MaintenanceHistory,
            Call::Manufacturer(_) => RegistryKind::ManufacturerVerification,
            Call::Training(_) => RegistryKind::OperatorTraining,
            Call::Certification(_) => RegistryKind::TestingCertification,
        }
    }

    /// Whether the call can only observe state.
    pub fn is_read_only(&self) -> bool {
        match self {
            Call::Maintenance(c) => !matches!(
                c,
                MaintenanceCall::AddRecord { .. }
                    | MaintenanceCall::Admin(AdminCall::TransferAdmin { .. })
            ),
            Call::Manufacturer(c) => matches!(
                c,
                ManufacturerCall::IsVerified { .. } | ManufacturerCall::Admin(AdminCall::GetAdmin)
            ),
            Call::Training(c) => matches!(
                c,
                TrainingCall::IsQualified { .. }
                    | TrainingCall::GetQualification { .. }
                    | TrainingCall::Admin(AdminCall::GetAdmin)
            ),
            Call::Certification(c) => matches!(
                c,
                CertificationCall::IsCertified { .. }
                    | CertificationCall::GetCertification { .. }
                    | CertificationCall::Admin(AdminCall::GetAdmin)
            ),
        }
    }
}

/// Outcome of an executed call.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A mutation committed.
    Success,
    /// A mutation was rejected with a registry error code.
    Error(u32),
    /// A read returned this value.
    Value(Value),
}

impl Response {
    pub fn from_result(result: Result<(), RegistryError>) -> Self {
        match result {
            Ok(()) => Response::Success,
            Err(e) => Response::Error(e.code()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Response::Success => json!({ "success": true }),
            Response::Error(code) => json!({ "error": code }),
            Response::Value(v) => v.clone(),
        }
    }
}

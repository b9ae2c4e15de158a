//! Composite record keys.
//!
//! Each key is a struct of its identifier fields, compared field by field.
//! Identifiers may contain any character, including the `/` used by the
//! `Display` forms, without two keys ever colliding.

use std::fmt;

use equipreg_core::Identity;

/// One maintenance event: equipment plus the allocated record number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaintenanceKey {
    pub equipment_id: String,
    pub record_id: u64,
}

impl MaintenanceKey {
    pub fn new(equipment_id: impl Into<String>, record_id: u64) -> Self {
        MaintenanceKey {
            equipment_id: equipment_id.into(),
            record_id,
        }
    }
}

impl fmt::Display for MaintenanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.equipment_id, self.record_id)
    }
}

/// An operator's qualification for one equipment type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualificationKey {
    pub operator: Identity,
    pub equipment_type: String,
}

impl QualificationKey {
    pub fn new(operator: Identity, equipment_type: impl Into<String>) -> Self {
        QualificationKey {
            operator,
            equipment_type: equipment_type.into(),
        }
    }
}

impl fmt::Display for QualificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.operator, self.equipment_type)
    }
}

/// A piece of equipment certified against one testing standard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CertificationKey {
    pub equipment_id: String,
    pub standard_id: String,
}

impl CertificationKey {
    pub fn new(equipment_id: impl Into<String>, standard_id: impl Into<String>) -> Self {
        CertificationKey {
            equipment_id: equipment_id.into(),
            standard_id: standard_id.into(),
        }
    }
}

impl fmt::Display for CertificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.equipment_id, self.standard_id)
    }
}

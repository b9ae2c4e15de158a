//! Decoding of named calls with positional JSON arguments.
//!
//! The main entry point is [`parse_call`], which takes a registry name, a
//! method name, and the argument array, and produces a typed [`Call`].

use equipreg_core::{Height, Identity};
use equipreg_registry::RegistryKind;
use serde_json::{json, Value};

use crate::types::*;

/// Errors while decoding a call. None of them reach a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterchangeError {
    #[error("unknown registry '{name}'")]
    UnknownRegistry { name: String },

    #[error("registry '{registry}' has no method '{method}'")]
    UnknownMethod { registry: String, method: String },

    #[error("'{method}' takes {expected} argument(s), got {got}")]
    Arity {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("'{method}' argument {position}: {message}")]
    InvalidArgument {
        method: String,
        position: usize,
        message: String,
    },
}

impl InterchangeError {
    /// Wire form: unroutable calls are "Method not found", the rest are
    /// "Invalid arguments".
    pub fn to_json(&self) -> Value {
        match self {
            InterchangeError::UnknownRegistry { .. } | InterchangeError::UnknownMethod { .. } => {
                json!({ "error": "Method not found" })
            }
            InterchangeError::Arity { .. } | InterchangeError::InvalidArgument { .. } => {
                json!({ "error": "Invalid arguments" })
            }
        }
    }
}

/// Decode `method(args...)` addressed to the registry named `registry`.
pub fn parse_call(registry: &str, method: &str, args: &[Value]) -> Result<Call, InterchangeError> {
    let kind: RegistryKind = registry
        .parse()
        .map_err(|_| InterchangeError::UnknownRegistry {
            name: registry.to_string(),
        })?;
    let args = Args { method, values: args };

    match kind {
        RegistryKind::MaintenanceHistory => parse_maintenance(kind, &args).map(Call::Maintenance),
        RegistryKind::ManufacturerVerification => {
            parse_manufacturer(kind, &args).map(Call::Manufacturer)
        }
        RegistryKind::OperatorTraining => parse_training(kind, &args).map(Call::Training),
        RegistryKind::TestingCertification => {
            parse_certification(kind, &args).map(Call::Certification)
        }
    }
}

// ── Per-registry dispatch ───────────────────────────────────────────

fn parse_maintenance(kind: RegistryKind, args: &Args) -> Result<MaintenanceCall, InterchangeError> {
    match args.method {
        "add-maintenance-record" => {
            args.expect(4)?;
            Ok(MaintenanceCall::AddRecord {
                equipment_id: args.string(0)?,
                maintenance_type: args.string(1)?,
                description: args.string(2)?,
                next_maintenance_due: args.height(3)?,
            })
        }
        "get-maintenance-record" => {
            args.expect(2)?;
            Ok(MaintenanceCall::GetRecord {
                equipment_id: args.string(0)?,
                record_id: args.uint(1)?,
            })
        }
        "is-maintenance-due" => {
            args.expect(2)?;
            Ok(MaintenanceCall::IsDue {
                equipment_id: args.string(0)?,
                record_id: args.uint(1)?,
            })
        }
        "get-record-counter" => {
            args.expect(0)?;
            Ok(MaintenanceCall::GetRecordCounter)
        }
        "get-maintenance-history" => {
            args.expect(1)?;
            Ok(MaintenanceCall::GetHistory {
                equipment_id: args.string(0)?,
            })
        }
        _ => parse_admin(kind, args).map(MaintenanceCall::Admin),
    }
}

fn parse_manufacturer(
    kind: RegistryKind,
    args: &Args,
) -> Result<ManufacturerCall, InterchangeError> {
    match args.method {
        "add-manufacturer" => {
            args.expect(1)?;
            Ok(ManufacturerCall::Add {
                manufacturer: args.identity(0)?,
            })
        }
        "remove-manufacturer" => {
            args.expect(1)?;
            Ok(ManufacturerCall::Remove {
                manufacturer: args.identity(0)?,
            })
        }
        "is-verified-manufacturer" => {
            args.expect(1)?;
            Ok(ManufacturerCall::IsVerified {
                manufacturer: args.identity(0)?,
            })
        }
        _ => parse_admin(kind, args).map(ManufacturerCall::Admin),
    }
}

fn parse_training(kind: RegistryKind, args: &Args) -> Result<TrainingCall, InterchangeError> {
    match args.method {
        "certify-operator" => {
            args.expect(4)?;
            Ok(TrainingCall::CertifyOperator {
                operator: args.identity(0)?,
                equipment_type: args.string(1)?,
                training_level: args.uint32(2)?,
                expires_at: args.height(3)?,
            })
        }
        "revoke-qualification" => {
            args.expect(2)?;
            Ok(TrainingCall::Revoke {
                operator: args.identity(0)?,
                equipment_type: args.string(1)?,
            })
        }
        "is-qualified" => {
            args.expect(2)?;
            Ok(TrainingCall::IsQualified {
                operator: args.identity(0)?,
                equipment_type: args.string(1)?,
            })
        }
        "get-qualification" => {
            args.expect(2)?;
            Ok(TrainingCall::GetQualification {
                operator: args.identity(0)?,
                equipment_type: args.string(1)?,
            })
        }
        _ => parse_admin(kind, args).map(TrainingCall::Admin),
    }
}

fn parse_certification(
    kind: RegistryKind,
    args: &Args,
) -> Result<CertificationCall, InterchangeError> {
    match args.method {
        "certify-equipment" => {
            args.expect(3)?;
            Ok(CertificationCall::CertifyEquipment {
                equipment_id: args.string(0)?,
                standard_id: args.string(1)?,
                expires_at: args.height(2)?,
            })
        }
        "revoke-certification" => {
            args.expect(2)?;
            Ok(CertificationCall::Revoke {
                equipment_id: args.string(0)?,
                standard_id: args.string(1)?,
            })
        }
        "is-certified" => {
            args.expect(2)?;
            Ok(CertificationCall::IsCertified {
                equipment_id: args.string(0)?,
                standard_id: args.string(1)?,
            })
        }
        "get-certification" => {
            args.expect(2)?;
            Ok(CertificationCall::GetCertification {
                equipment_id: args.string(0)?,
                standard_id: args.string(1)?,
            })
        }
        _ => parse_admin(kind, args).map(CertificationCall::Admin),
    }
}

fn parse_admin(kind: RegistryKind, args: &Args) -> Result<AdminCall, InterchangeError> {
    match args.method {
        "transfer-admin" => {
            args.expect(1)?;
            Ok(AdminCall::TransferAdmin {
                new_admin: args.identity(0)?,
            })
        }
        "get-admin" => {
            args.expect(0)?;
            Ok(AdminCall::GetAdmin)
        }
        other => Err(InterchangeError::UnknownMethod {
            registry: kind.name().to_string(),
            method: other.to_string(),
        }),
    }
}

// ── Argument helpers ────────────────────────────────────────────────

struct Args<'a> {
    method: &'a str,
    values: &'a [Value],
}

impl Args<'_> {
    fn expect(&self, n: usize) -> Result<(), InterchangeError> {
        if self.values.len() == n {
            Ok(())
        } else {
            Err(InterchangeError::Arity {
                method: self.method.to_string(),
                expected: n,
                got: self.values.len(),
            })
        }
    }

    fn invalid(&self, position: usize, message: impl Into<String>) -> InterchangeError {
        InterchangeError::InvalidArgument {
            method: self.method.to_string(),
            position,
            message: message.into(),
        }
    }

    fn string(&self, i: usize) -> Result<String, InterchangeError> {
        self.values
            .get(i)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| self.invalid(i, "expected a string"))
    }

    fn uint(&self, i: usize) -> Result<u64, InterchangeError> {
        self.values
            .get(i)
            .and_then(|v| v.as_u64())
            .ok_or_else(|| self.invalid(i, "expected a non-negative integer"))
    }

    fn uint32(&self, i: usize) -> Result<u32, InterchangeError> {
        let n = self.uint(i)?;
        u32::try_from(n).map_err(|_| self.invalid(i, format!("{} does not fit in 32 bits", n)))
    }

    fn height(&self, i: usize) -> Result<Height, InterchangeError> {
        self.uint(i).map(Height)
    }

    fn identity(&self, i: usize) -> Result<Identity, InterchangeError> {
        let principal = self.string(i)?;
        Identity::new(principal).map_err(|e| self.invalid(i, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATOR: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    #[test]
    fn parses_certify_operator() {
        let call = parse_call(
            "operator-training",
            "certify-operator",
            &[json!(OPERATOR), json!("CRANE-OPERATOR"), json!(2), json!(200)],
        )
        .unwrap();
        assert_eq!(
            call,
            Call::Training(TrainingCall::CertifyOperator {
                operator: Identity::new(OPERATOR).unwrap(),
                equipment_type: "CRANE-OPERATOR".to_string(),
                training_level: 2,
                expires_at: Height(200),
            })
        );
    }

    #[test]
    fn admin_methods_available_on_every_registry() {
        for kind in RegistryKind::ALL {
            let call = parse_call(kind.name(), "get-admin", &[]).unwrap();
            assert_eq!(call.registry(), kind);
            assert!(call.is_read_only());

            let call = parse_call(kind.name(), "transfer-admin", &[json!(OPERATOR)]).unwrap();
            assert!(!call.is_read_only());
        }
    }

    #[test]
    fn unknown_method_and_registry() {
        let err = parse_call("testing-certification", "certify-operator", &[]).unwrap_err();
        assert_eq!(
            err,
            InterchangeError::UnknownMethod {
                registry: "testing-certification".to_string(),
                method: "certify-operator".to_string(),
            }
        );
        assert_eq!(err.to_json(), json!({ "error": "Method not found" }));

        let err = parse_call("asset-registry", "get-admin", &[]).unwrap_err();
        assert!(matches!(err, InterchangeError::UnknownRegistry { .. }));
        assert_eq!(err.to_json(), json!({ "error": "Method not found" }));
    }

    #[test]
    fn wrong_arity() {
        let err = parse_call(
            "testing-certification",
            "certify-equipment",
            &[json!("EQUIP001"), json!("ISO9001")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InterchangeError::Arity {
                method: "certify-equipment".to_string(),
                expected: 3,
                got: 2,
            }
        );
        assert_eq!(err.to_json(), json!({ "error": "Invalid arguments" }));
    }

    #[test]
    fn wrong_argument_types() {
        let negative = parse_call(
            "testing-certification",
            "certify-equipment",
            &[json!("EQUIP001"), json!("ISO9001"), json!(-5)],
        );
        assert!(matches!(
            negative,
            Err(InterchangeError::InvalidArgument { position: 2, .. })
        ));

        let numeric_id = parse_call("maintenance-history", "get-maintenance-record", &[json!(1), json!(1)]);
        assert!(matches!(
            numeric_id,
            Err(InterchangeError::InvalidArgument { position: 0, .. })
        ));

        let empty_principal = parse_call("manufacturer-verification", "add-manufacturer", &[json!("")]);
        assert!(matches!(
            empty_principal,
            Err(InterchangeError::InvalidArgument { position: 0, .. })
        ));

        let huge_level = parse_call(
            "operator-training",
            "certify-operator",
            &[json!(OPERATOR), json!("CRANE"), json!(u64::MAX), json!(200)],
        );
        assert!(matches!(
            huge_level,
            Err(InterchangeError::InvalidArgument { position: 2, .. })
        ));
    }
}

//! In-process host environment.
//!
//! Calls are executed one at a time against a consistent view of state and
//! clock. A call either commits all of its effects or none of them; the
//! registries guarantee this by validating before their single write.

use equipreg_core::{CallContext, Height, Identity};
use equipreg_interchange::{
    parse_call, AdminCall, Call, CertificationCall, MaintenanceCall, ManufacturerCall, Response,
    TrainingCall,
};
use equipreg_registry::{
    Administered, MaintenanceHistory, ManufacturerVerification, OperatorTraining, RegistryKind,
    TestingCertification,
};
use serde_json::{json, Value};

use crate::config::DeployConfig;
use crate::error::HostError;

pub struct Chain {
    sender: Identity,
    height: Height,
    maintenance: MaintenanceHistory,
    manufacturers: ManufacturerVerification,
    training: OperatorTraining,
    certification: TestingCertification,
}

impl Chain {
    /// Deploy all four registries as described by `config`. The deployer is
    /// the initial sender and the clock starts at the genesis height.
    pub fn deploy(config: &DeployConfig) -> Self {
        let admin = |kind| config.admin_for(kind).clone();
        tracing::info!(
            deployer = %config.chain.deployer,
            genesis_height = %config.chain.genesis_height,
            "registries deployed"
        );
        Chain {
            sender: config.chain.deployer.clone(),
            height: config.chain.genesis_height,
            maintenance: MaintenanceHistory::new(admin(RegistryKind::MaintenanceHistory)),
            manufacturers: ManufacturerVerification::new(admin(
                RegistryKind::ManufacturerVerification,
            )),
            training: OperatorTraining::new(admin(RegistryKind::OperatorTraining)),
            certification: TestingCertification::new(admin(RegistryKind::TestingCertification)),
        }
    }

    /// Deploy with `deployer` administering every registry.
    pub fn new(deployer: Identity, genesis_height: Height) -> Self {
        Self::deploy(&DeployConfig::new(deployer, genesis_height))
    }

    // ── Environment ──────────────────────────────────────────────────────────

    pub fn sender(&self) -> &Identity {
        &self.sender
    }

    /// Submit subsequent calls as `sender`.
    pub fn set_sender(&mut self, sender: Identity) {
        self.sender = sender;
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Move the clock to `height`. Staying at the current height is allowed;
    /// going back is not.
    pub fn advance_to(&mut self, height: Height) -> Result<(), HostError> {
        if height < self.height {
            return Err(HostError::ClockRegression {
                current: self.height,
                requested: height,
            });
        }
        self.height = height;
        Ok(())
    }

    /// Advance the clock by `blocks`.
    pub fn mine(&mut self, blocks: u64) {
        self.height = self.height.after(blocks);
    }

    /// Caller and clock for the next call.
    pub fn context(&self) -> CallContext {
        CallContext::new(self.sender.clone(), self.height)
    }

    // ── Registry access ──────────────────────────────────────────────────────

    pub fn maintenance(&self) -> &MaintenanceHistory {
        &self.maintenance
    }

    pub fn manufacturers(&self) -> &ManufacturerVerification {
        &self.manufacturers
    }

    pub fn training(&self) -> &OperatorTraining {
        &self.training
    }

    pub fn certification(&self) -> &TestingCertification {
        &self.certification
    }

    // ── Calls ────────────────────────────────────────────────────────────────

    /// Execute `method(args...)` on the registry named `registry` as the
    /// current sender at the current height.
    ///
    /// Returns the wire response: `{"success": true}`, `{"error": <code>}`,
    /// or the read value. Calls that cannot be decoded return
    /// `{"error": "Method not found"}` or `{"error": "Invalid arguments"}`
    /// and leave state untouched.
    pub fn call(&mut self, registry: &str, method: &str, args: &[Value]) -> Result<Value, HostError> {
        match parse_call(registry, method, args) {
            Ok(call) => {
                tracing::debug!(
                    registry,
                    method,
                    sender = %self.sender,
                    height = %self.height,
                    "dispatching call"
                );
                Ok(self.execute(call)?.to_json())
            }
            Err(e) => {
                tracing::debug!(registry, method, error = %e, "call rejected");
                Ok(e.to_json())
            }
        }
    }

    /// Execute a decoded call.
    pub fn execute(&mut self, call: Call) -> Result<Response, HostError> {
        let env = self.context();
        let response = match call {
            Call::Maintenance(c) => self.execute_maintenance(&env, c)?,
            Call::Manufacturer(c) => self.execute_manufacturer(&env, c),
            Call::Training(c) => self.execute_training(&env, c)?,
            Call::Certification(c) => self.execute_certification(&env, c)?,
        };
        if let Response::Error(code) = &response {
            tracing::debug!(code, sender = %env.caller, "call failed");
        }
        Ok(response)
    }

    fn execute_maintenance(
        &mut self,
        env: &CallContext,
        call: MaintenanceCall,
    ) -> Result<Response, HostError> {
        let reg = &mut self.maintenance;
        let response = match call {
            MaintenanceCall::AddRecord {
                equipment_id,
                maintenance_type,
                description,
                next_maintenance_due,
            } => {
                reg.add_record(
                    env,
                    &equipment_id,
                    &maintenance_type,
                    &description,
                    next_maintenance_due,
                );
                Response::Success
            }
            MaintenanceCall::GetRecord {
                equipment_id,
                record_id,
            } => Response::Value(serde_json::to_value(
                reg.get_record(&equipment_id, record_id),
            )?),
            MaintenanceCall::IsDue {
                equipment_id,
                record_id,
            } => Response::Value(json!(reg.is_maintenance_due(
                env.clock,
                &equipment_id,
                record_id
            ))),
            MaintenanceCall::GetRecordCounter => Response::Value(json!(reg.record_counter())),
            MaintenanceCall::GetHistory { equipment_id } => {
                let mut entries = Vec::new();
                for (record_id, record) in reg.history(&equipment_id) {
                    entries.push(json!({
                        "recordId": record_id,
                        "record": serde_json::to_value(record)?,
                    }));
                }
                Response::Value(Value::Array(entries))
            }
            MaintenanceCall::Admin(admin) => execute_admin(reg, env, admin),
        };
        Ok(response)
    }

    fn execute_manufacturer(&mut self, env: &CallContext, call: ManufacturerCall) -> Response {
        let reg = &mut self.manufacturers;
        match call {
            ManufacturerCall::Add { manufacturer } => {
                Response::from_result(reg.add_manufacturer(env, manufacturer))
            }
            ManufacturerCall::Remove { manufacturer } => {
                Response::from_result(reg.remove_manufacturer(env, &manufacturer))
            }
            ManufacturerCall::IsVerified { manufacturer } => {
                Response::Value(json!(reg.is_verified_manufacturer(&manufacturer)))
            }
            ManufacturerCall::Admin(admin) => execute_admin(reg, env, admin),
        }
    }

    fn execute_training(
        &mut self,
        env: &CallContext,
        call: TrainingCall,
    ) -> Result<Response, HostError> {
        let reg = &mut self.training;
        let response = match call {
            TrainingCall::CertifyOperator {
                operator,
                equipment_type,
                training_level,
                expires_at,
            } => Response::from_result(reg.certify_operator(
                env,
                operator,
                &equipment_type,
                training_level,
                expires_at,
            )),
            TrainingCall::Revoke {
                operator,
                equipment_type,
            } => Response::from_result(reg.revoke_qualification(env, &operator, &equipment_type)),
            TrainingCall::IsQualified {
                operator,
                equipment_type,
            } => Response::Value(json!(reg.is_qualified(
                env.clock,
                &operator,
                &equipment_type
            ))),
            TrainingCall::GetQualification {
                operator,
                equipment_type,
            } => Response::Value(serde_json::to_value(
                reg.get_qualification(&operator, &equipment_type),
            )?),
            TrainingCall::Admin(admin) => execute_admin(reg, env, admin),
        };
        Ok(response)
    }

    fn execute_certification(
        &mut self,
        env: &CallContext,
        call: CertificationCall,
    ) -> Result<Response, HostError> {
        let reg = &mut self.certification;
        let response = match call {
            CertificationCall::CertifyEquipment {
                equipment_id,
                standard_id,
                expires_at,
            } => Response::from_result(reg.certify_equipment(
                env,
                &equipment_id,
                &standard_id,
                expires_at,
            )),
            CertificationCall::Revoke {
                equipment_id,
                standard_id,
            } => Response::from_result(reg.revoke_certification(env, &equipment_id, &standard_id)),
            CertificationCall::IsCertified {
                equipment_id,
                standard_id,
            } => Response::Value(json!(reg.is_certified(
                env.clock,
                &equipment_id,
                &standard_id
            ))),
            CertificationCall::GetCertification {
                equipment_id,
                standard_id,
            } => Response::Value(serde_json::to_value(
                reg.get_certification(&equipment_id, &standard_id),
            )?),
            CertificationCall::Admin(admin) => execute_admin(reg, env, admin),
        };
        Ok(response)
    }
}

fn execute_admin<R: Administered>(reg: &mut R, env: &CallContext, call: AdminCall) -> Response {
    match call {
        AdminCall::TransferAdmin { new_admin } => {
            Response::from_result(reg.transfer_admin(env, new_admin))
        }
        AdminCall::GetAdmin => Response::Value(json!(reg.admin().as_str())),
    }
}

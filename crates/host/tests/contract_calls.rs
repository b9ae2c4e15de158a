//! End-to-end calls through `Chain::call`, using positional JSON arguments
//! the way a client submits them.

use std::io::Write;

use equipreg_core::{Height, Identity};
use equipreg_host::{read_deploy_config, Chain, HostError};
use serde_json::{json, Value};

const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const TECHNICIAN: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
const OUTSIDER: &str = "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC";

fn principal(p: &str) -> Identity {
    Identity::new(p).unwrap()
}

fn chain() -> Chain {
    Chain::new(principal(ADMIN), Height(100))
}

fn success() -> Value {
    json!({ "success": true })
}

fn error(code: u32) -> Value {
    json!({ "error": code })
}

fn call(chain: &mut Chain, registry: &str, method: &str, args: Value) -> Value {
    let args = match args {
        Value::Array(values) => values,
        other => panic!("args must be an array, got {other}"),
    };
    chain.call(registry, method, &args).unwrap()
}

// ── Maintenance history ──────────────────────────────────────────────────────

#[test]
fn maintenance_record_is_stored_with_caller_and_height() {
    let mut chain = chain();
    let result = call(
        &mut chain,
        "maintenance-history",
        "add-maintenance-record",
        json!(["EQUIP001", "ROUTINE", "Oil change and filter replacement", 200]),
    );
    assert_eq!(result, success());
    assert_eq!(
        call(&mut chain, "maintenance-history", "get-record-counter", json!([])),
        json!(1)
    );

    let record = call(
        &mut chain,
        "maintenance-history",
        "get-maintenance-record",
        json!(["EQUIP001", 1]),
    );
    assert_eq!(
        record,
        json!({
            "performedBy": ADMIN,
            "performedAt": 100,
            "maintenanceType": "ROUTINE",
            "description": "Oil change and filter replacement",
            "nextMaintenanceDue": 200,
        })
    );
}

#[test]
fn record_counter_spans_all_equipment() {
    let mut chain = chain();
    call(
        &mut chain,
        "maintenance-history",
        "add-maintenance-record",
        json!(["EQUIP001", "ROUTINE", "Oil change", 200]),
    );
    call(
        &mut chain,
        "maintenance-history",
        "add-maintenance-record",
        json!(["EQUIP001", "REPAIR", "Belt replacement", 300]),
    );
    assert_eq!(
        call(&mut chain, "maintenance-history", "get-record-counter", json!([])),
        json!(2)
    );

    call(
        &mut chain,
        "maintenance-history",
        "add-maintenance-record",
        json!(["EQUIP002", "INSPECTION", "Annual safety check", 400]),
    );
    assert_eq!(
        call(&mut chain, "maintenance-history", "get-record-counter", json!([])),
        json!(3)
    );

    let history = call(
        &mut chain,
        "maintenance-history",
        "get-maintenance-history",
        json!(["EQUIP001"]),
    );
    let ids: Vec<&Value> = history
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| &entry["recordId"])
        .collect();
    assert_eq!(ids, vec![&json!(1), &json!(2)]);
    assert_eq!(history[1]["record"]["maintenanceType"], json!("REPAIR"));
}

#[test]
fn maintenance_becomes_due_at_the_due_height() {
    let mut chain = chain();
    call(
        &mut chain,
        "maintenance-history",
        "add-maintenance-record",
        json!(["EQUIP001", "ROUTINE", "Oil change", 150]),
    );

    let due = |chain: &mut Chain| {
        call(
            chain,
            "maintenance-history",
            "is-maintenance-due",
            json!(["EQUIP001", 1]),
        )
    };
    assert_eq!(due(&mut chain), json!(false));
    chain.advance_to(Height(150)).unwrap();
    assert_eq!(due(&mut chain), json!(true));
    chain.advance_to(Height(200)).unwrap();
    assert_eq!(due(&mut chain), json!(true));
}

#[test]
fn missing_maintenance_record_reads_as_null() {
    let mut chain = chain();
    assert_eq!(
        call(
            &mut chain,
            "maintenance-history",
            "get-maintenance-record",
            json!(["EQUIP001", 999])
        ),
        Value::Null
    );
    assert_eq!(
        call(
            &mut chain,
            "maintenance-history",
            "is-maintenance-due",
            json!(["EQUIP001", 999])
        ),
        json!(false)
    );
}

// ── Manufacturer verification ────────────────────────────────────────────────

#[test]
fn admin_adds_and_removes_manufacturers() {
    let mut chain = chain();
    let registry = "manufacturer-verification";
    assert_eq!(
        call(&mut chain, registry, "add-manufacturer", json!([TECHNICIAN])),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "is-verified-manufacturer", json!([TECHNICIAN])),
        json!(true)
    );

    assert_eq!(
        call(&mut chain, registry, "remove-manufacturer", json!([TECHNICIAN])),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "is-verified-manufacturer", json!([TECHNICIAN])),
        json!(false)
    );
}

#[test]
fn non_admin_cannot_add_manufacturer() {
    let mut chain = chain();
    chain.set_sender(principal(OUTSIDER));
    assert_eq!(
        call(
            &mut chain,
            "manufacturer-verification",
            "add-manufacturer",
            json!([TECHNICIAN])
        ),
        error(100)
    );
    assert_eq!(
        call(
            &mut chain,
            "manufacturer-verification",
            "is-verified-manufacturer",
            json!([TECHNICIAN])
        ),
        json!(false)
    );
}

#[test]
fn transferred_admin_takes_effect_immediately() {
    let mut chain = chain();
    let registry = "manufacturer-verification";
    assert_eq!(
        call(&mut chain, registry, "transfer-admin", json!([TECHNICIAN])),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "get-admin", json!([])),
        json!(TECHNICIAN)
    );

    assert_eq!(
        call(&mut chain, registry, "add-manufacturer", json!([OUTSIDER])),
        error(100)
    );
    chain.set_sender(principal(TECHNICIAN));
    assert_eq!(
        call(&mut chain, registry, "add-manufacturer", json!([OUTSIDER])),
        success()
    );

    // Other registries keep their own admin.
    assert_eq!(
        call(&mut chain, "testing-certification", "get-admin", json!([])),
        json!(ADMIN)
    );
}

// ── Operator training ────────────────────────────────────────────────────────

#[test]
fn operator_qualification_lifecycle() {
    let mut chain = chain();
    let registry = "operator-training";
    assert_eq!(
        call(
            &mut chain,
            registry,
            "certify-operator",
            json!([TECHNICIAN, "FORKLIFT", 2, 200])
        ),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "is-qualified", json!([TECHNICIAN, "FORKLIFT"])),
        json!(true)
    );
    assert_eq!(
        call(
            &mut chain,
            registry,
            "get-qualification",
            json!([TECHNICIAN, "FORKLIFT"])
        ),
        json!({
            "certifiedBy": ADMIN,
            "certifiedAt": 100,
            "expiresAt": 200,
            "revoked": false,
            "trainingLevel": 2,
        })
    );

    chain.advance_to(Height(200)).unwrap();
    assert_eq!(
        call(&mut chain, registry, "is-qualified", json!([TECHNICIAN, "FORKLIFT"])),
        json!(false)
    );
}

#[test]
fn qualification_cannot_start_expired() {
    let mut chain = chain();
    assert_eq!(
        call(
            &mut chain,
            "operator-training",
            "certify-operator",
            json!([TECHNICIAN, "CRANE", 1, 100])
        ),
        error(101)
    );
    assert_eq!(
        call(
            &mut chain,
            "operator-training",
            "get-qualification",
            json!([TECHNICIAN, "CRANE"])
        ),
        Value::Null
    );
}

#[test]
fn certifier_revokes_qualification() {
    let mut chain = chain();
    let registry = "operator-training";
    chain.set_sender(principal(TECHNICIAN));
    call(
        &mut chain,
        registry,
        "certify-operator",
        json!([OUTSIDER, "FORKLIFT", 1, 300]),
    );

    chain.set_sender(principal(OUTSIDER));
    assert_eq!(
        call(
            &mut chain,
            registry,
            "revoke-qualification",
            json!([OUTSIDER, "FORKLIFT"])
        ),
        error(100)
    );

    chain.set_sender(principal(TECHNICIAN));
    assert_eq!(
        call(
            &mut chain,
            registry,
            "revoke-qualification",
            json!([OUTSIDER, "FORKLIFT"])
        ),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "is-qualified", json!([OUTSIDER, "FORKLIFT"])),
        json!(false)
    );
    assert_eq!(
        call(
            &mut chain,
            registry,
            "revoke-qualification",
            json!([OUTSIDER, "CRANE"])
        ),
        error(102)
    );
}

// ── Testing certification ────────────────────────────────────────────────────

#[test]
fn equipment_certification_lifecycle() {
    let mut chain = chain();
    let registry = "testing-certification";
    assert_eq!(
        call(
            &mut chain,
            registry,
            "certify-equipment",
            json!(["EQUIP001", "ISO9001", 200])
        ),
        success()
    );
    assert_eq!(
        call(
            &mut chain,
            registry,
            "get-certification",
            json!(["EQUIP001", "ISO9001"])
        ),
        json!({
            "certifiedBy": ADMIN,
            "certifiedAt": 100,
            "expiresAt": 200,
            "revoked": false,
        })
    );

    chain.advance_to(Height(199)).unwrap();
    assert_eq!(
        call(&mut chain, registry, "is-certified", json!(["EQUIP001", "ISO9001"])),
        json!(true)
    );
    chain.advance_to(Height(200)).unwrap();
    assert_eq!(
        call(&mut chain, registry, "is-certified", json!(["EQUIP001", "ISO9001"])),
        json!(false)
    );
}

#[test]
fn certification_rejects_past_expiration() {
    let mut chain = chain();
    assert_eq!(
        call(
            &mut chain,
            "testing-certification",
            "certify-equipment",
            json!(["EQUIP001", "ISO9001", 50])
        ),
        error(101)
    );
}

#[test]
fn admin_revokes_any_certification() {
    let mut chain = chain();
    let registry = "testing-certification";
    chain.set_sender(principal(TECHNICIAN));
    call(
        &mut chain,
        registry,
        "certify-equipment",
        json!(["EQUIP001", "ISO9001", 200]),
    );

    chain.set_sender(principal(OUTSIDER));
    assert_eq!(
        call(
            &mut chain,
            registry,
            "revoke-certification",
            json!(["EQUIP001", "ISO9001"])
        ),
        error(100)
    );
    assert_eq!(
        call(&mut chain, registry, "is-certified", json!(["EQUIP001", "ISO9001"])),
        json!(true)
    );

    chain.set_sender(principal(ADMIN));
    assert_eq!(
        call(
            &mut chain,
            registry,
            "revoke-certification",
            json!(["EQUIP001", "ISO9001"])
        ),
        success()
    );
    let record = call(
        &mut chain,
        registry,
        "get-certification",
        json!(["EQUIP001", "ISO9001"]),
    );
    assert_eq!(record["revoked"], json!(true));
    assert_eq!(record["certifiedBy"], json!(TECHNICIAN));

    // A fresh certification overwrites the revoked one.
    assert_eq!(
        call(
            &mut chain,
            registry,
            "certify-equipment",
            json!(["EQUIP001", "ISO9001", 300])
        ),
        success()
    );
    assert_eq!(
        call(&mut chain, registry, "is-certified", json!(["EQUIP001", "ISO9001"])),
        json!(true)
    );
}

// ── Routing and host rules ───────────────────────────────────────────────────

#[test]
fn unroutable_calls_report_method_not_found() {
    let mut chain = chain();
    let not_found = json!({ "error": "Method not found" });
    assert_eq!(
        call(&mut chain, "maintenance-history", "delete-record", json!([])),
        not_found
    );
    assert_eq!(
        call(&mut chain, "asset-registry", "get-admin", json!([])),
        not_found
    );
}

#[test]
fn malformed_arguments_leave_state_untouched() {
    let mut chain = chain();
    assert_eq!(
        call(
            &mut chain,
            "testing-certification",
            "certify-equipment",
            json!(["EQUIP001", "ISO9001", "soon"])
        ),
        json!({ "error": "Invalid arguments" })
    );
    assert_eq!(
        call(
            &mut chain,
            "maintenance-history",
            "add-maintenance-record",
            json!(["EQUIP001", "ROUTINE"])
        ),
        json!({ "error": "Invalid arguments" })
    );
    assert_eq!(
        call(&mut chain, "maintenance-history", "get-record-counter", json!([])),
        json!(0)
    );
    assert!(chain.certification().get_certification("EQUIP001", "ISO9001").is_none());
}

#[test]
fn clock_regression_is_rejected() {
    let mut chain = chain();
    chain.mine(50);
    let err = chain.advance_to(Height(120)).unwrap_err();
    assert!(matches!(err, HostError::ClockRegression { .. }));
    assert_eq!(chain.height(), Height(150));
}

#[test]
fn deploys_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[chain]
genesis_height = 500
deployer = "{ADMIN}"

[registries.testing-certification]
admin = "{TECHNICIAN}"
"#
    )
    .unwrap();

    let config = read_deploy_config(file.path()).unwrap();
    let mut chain = Chain::deploy(&config);
    assert_eq!(chain.height(), Height(500));
    assert_eq!(chain.sender().as_str(), ADMIN);
    assert_eq!(
        call(&mut chain, "testing-certification", "get-admin", json!([])),
        json!(TECHNICIAN)
    );
    assert_eq!(
        call(&mut chain, "operator-training", "get-admin", json!([])),
        json!(ADMIN)
    );
    assert_eq!(
        call(
            &mut chain,
            "testing-certification",
            "certify-equipment",
            json!(["EQUIP001", "ISO9001", 400])
        ),
        error(101)
    );
}

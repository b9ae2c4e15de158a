use super::{expect_eq, key, record, ProbeKey, ProbeRecord, TestResult};
use crate::RecordStore;

pub(super) fn run_lookup_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "lookup",
            "get_missing_is_none",
            get_missing_is_none(factory),
        ),
        TestResult::from_result(
            "lookup",
            "get_returns_stored_record",
            get_returns_stored_record(factory),
        ),
        TestResult::from_result(
            "lookup",
            "falsy_record_is_not_absent",
            falsy_record_is_not_absent(factory),
        ),
        TestResult::from_result(
            "lookup",
            "get_does_not_create_entries",
            get_does_not_create_entries(factory),
        ),
    ]
}

// ── Test implementations ──────────────────────────────────────────────────────

fn get_missing_is_none<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let s = factory();
    expect_eq("get on empty store", s.get(&key("EQUIP001", "1")), None)?;
    expect_eq("contains on empty store", s.contains(&key("EQUIP001", "1")), false)
}

fn get_returns_stored_record<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("EQUIP001", "ISO9001"), record(true, "certified"));
    expect_eq(
        "get after put",
        s.get(&key("EQUIP001", "ISO9001")),
        Some(record(true, "certified")),
    )
}

/// A record whose every field is falsy must still read back as present.
fn falsy_record_is_not_absent<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("EQUIP001", "1"), record(false, ""));
    expect_eq(
        "get falsy record",
        s.get(&key("EQUIP001", "1")),
        Some(record(false, "")),
    )?;
    expect_eq("contains falsy record", s.contains(&key("EQUIP001", "1")), true)
}

fn get_does_not_create_entries<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let s = factory();
    let _ = s.get(&key("EQUIP001", "999"));
    expect_eq("len after miss", s.len(), 0)?;
    expect_eq("is_empty after miss", s.is_empty(), true)
}

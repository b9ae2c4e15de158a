use super::{expect_eq, key, record, ProbeKey, ProbeRecord, TestResult};
use crate::RecordStore;

pub(super) fn run_upsert_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "upsert",
            "put_new_key_returns_none",
            put_new_key_returns_none(factory),
        ),
        TestResult::from_result(
            "upsert",
            "put_overwrites_and_returns_previous",
            put_overwrites_and_returns_previous(factory),
        ),
        TestResult::from_result(
            "upsert",
            "overwrite_does_not_grow_store",
            overwrite_does_not_grow_store(factory),
        ),
        TestResult::from_result(
            "upsert",
            "keys_are_independent",
            keys_are_independent(factory),
        ),
        TestResult::from_result(
            "upsert",
            "separator_in_components_does_not_collide",
            separator_in_components_does_not_collide(factory),
        ),
    ]
}

// ── Test implementations ──────────────────────────────────────────────────────

fn put_new_key_returns_none<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    expect_eq(
        "put on empty store",
        s.put(key("EQUIP001", "ISO9001"), record(true, "a")),
        None,
    )
}

fn put_overwrites_and_returns_previous<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("EQUIP001", "ISO9001"), record(true, "first"));
    let previous = s.put(key("EQUIP001", "ISO9001"), record(false, "second"));
    expect_eq("previous record", previous, Some(record(true, "first")))?;
    expect_eq(
        "current record",
        s.get(&key("EQUIP001", "ISO9001")),
        Some(record(false, "second")),
    )
}

fn overwrite_does_not_grow_store<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    for note in ["a", "b", "c"] {
        s.put(key("EQUIP001", "ISO9001"), record(true, note));
    }
    expect_eq("len after three overwrites", s.len(), 1)
}

fn keys_are_independent<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("EQUIP001", "ISO9001"), record(true, "one"));
    s.put(key("EQUIP002", "ISO9001"), record(true, "two"));
    s.put(key("EQUIP001", "ISO9001"), record(false, "one-updated"));
    expect_eq(
        "untouched key",
        s.get(&key("EQUIP002", "ISO9001")),
        Some(record(true, "two")),
    )
}

/// ("A-B", "C") and ("A", "B-C") join to the same string; they must remain
/// two distinct records.
fn separator_in_components_does_not_collide<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("A-B", "C"), record(true, "left"));
    s.put(key("A", "B-C"), record(true, "right"));
    expect_eq("len", s.len(), 2)?;
    expect_eq("left", s.get(&key("A-B", "C")), Some(record(true, "left")))?;
    expect_eq("right", s.get(&key("A", "B-C")), Some(record(true, "right")))
}

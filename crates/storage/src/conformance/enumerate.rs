use super::{expect_eq, key, record, ProbeKey, ProbeRecord, TestResult};
use crate::RecordStore;

pub(super) fn run_enumerate_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "enumerate",
            "entries_empty_store",
            entries_empty_store(factory),
        ),
        TestResult::from_result(
            "enumerate",
            "entries_in_key_order",
            entries_in_key_order(factory),
        ),
        TestResult::from_result(
            "enumerate",
            "entries_reflect_overwrite_and_remove",
            entries_reflect_overwrite_and_remove(factory),
        ),
    ]
}

fn entries_empty_store<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let s = factory();
    expect_eq("entries", s.entries(), Vec::new())
}

/// Entries come back sorted by key regardless of insertion order.
fn entries_in_key_order<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("EQUIP002", "1"), record(true, "c"));
    s.put(key("EQUIP001", "2"), record(true, "b"));
    s.put(key("EQUIP001", "1"), record(true, "a"));

    let keys: Vec<ProbeKey> = s.entries().into_iter().map(|(k, _)| k).collect();
    expect_eq(
        "key order",
        keys,
        vec![key("EQUIP001", "1"), key("EQUIP001", "2"), key("EQUIP002", "1")],
    )
}

fn entries_reflect_overwrite_and_remove<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("a", "1"), record(true, "old"));
    s.put(key("b", "1"), record(true, "gone"));
    s.put(key("a", "1"), record(false, "new"));
    s.remove(&key("b", "1"));
    expect_eq(
        "entries",
        s.entries(),
        vec![(key("a", "1"), record(false, "new"))],
    )?;
    expect_eq("len", s.len(), 1)
}

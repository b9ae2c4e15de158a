use super::{expect_eq, key, record, ProbeKey, ProbeRecord, TestResult};
use crate::RecordStore;

pub(super) fn run_remove_tests<S, F>(factory: &F) -> Vec<TestResult>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    vec![
        TestResult::from_result(
            "remove",
            "remove_returns_deleted_record",
            remove_returns_deleted_record(factory),
        ),
        TestResult::from_result(
            "remove",
            "remove_missing_is_none",
            remove_missing_is_none(factory),
        ),
        TestResult::from_result(
            "remove",
            "removed_key_can_be_reinserted",
            removed_key_can_be_reinserted(factory),
        ),
    ]
}

fn remove_returns_deleted_record<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("ST2", ""), record(true, ""));
    expect_eq("removed", s.remove(&key("ST2", "")), Some(record(true, "")))?;
    expect_eq("get after remove", s.get(&key("ST2", "")), None)?;
    expect_eq("len after remove", s.len(), 0)
}

fn remove_missing_is_none<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("ST2", ""), record(true, ""));
    expect_eq("remove missing", s.remove(&key("ST3", "")), None)?;
    expect_eq("len unchanged", s.len(), 1)
}

fn removed_key_can_be_reinserted<S, F>(factory: &F) -> Result<(), String>
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut s = factory();
    s.put(key("ST2", ""), record(true, "old"));
    s.remove(&key("ST2", ""));
    expect_eq("put after remove", s.put(key("ST2", ""), record(true, "new")), None)?;
    expect_eq("get", s.get(&key("ST2", "")), Some(record(true, "new")))
}

//! Conformance test suite for `RecordStore` implementations.
//!
//! This module provides a backend-agnostic test suite that any
//! `RecordStore` implementation can run to verify it behaves the way the
//! registries rely on. The suite covers:
//!
//! - **Lookup**: explicit absence, absence distinct from falsy records
//! - **Upsert**: overwrite in place, key independence, composite keys that
//!   would collide if joined into a string
//! - **Remove**: deletion and its return value
//! - **Enumeration**: ascending key order, length tracking
//!
//! # Usage
//!
//! Backend crates call [`run_conformance_suite`] with a factory that
//! creates a fresh, empty store for each test:
//!
//! ```ignore
//! use equipreg_storage::conformance::{run_conformance_suite, ProbeKey, ProbeRecord};
//!
//! #[test]
//! fn sled_conformance() {
//!     let report = run_conformance_suite(|| SledStore::<ProbeKey, ProbeRecord>::temporary());
//!     assert!(report.failed == 0, "{report}");
//! }
//! ```

mod enumerate;
mod lookup;
mod remove;
mod upsert;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RecordStore;

/// Two-part composite key used by the suite.
pub type ProbeKey = (String, String);

/// Record type used by the suite. `flag: false` with an empty note is the
/// "all falsy" record that must still be distinguishable from absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub flag: bool,
    pub note: String,
}

/// Result of a single conformance test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Test category (e.g. "lookup", "upsert").
    pub category: String,
    /// Test name (e.g. "get_missing_is_none").
    pub name: String,
    pub passed: bool,
    /// Error message if the test failed.
    pub message: Option<String>,
}

impl TestResult {
    fn from_result(category: &str, name: &str, result: Result<(), String>) -> Self {
        let (passed, message) = match result {
            Ok(()) => (true, None),
            Err(msg) => (false, Some(msg)),
        };
        Self {
            category: category.to_string(),
            name: name.to_string(),
            passed,
            message,
        }
    }
}

/// Aggregated report from a full conformance suite run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Conformance: {}/{} passed ({} failed)",
            self.passed, self.total, self.failed
        )?;
        for r in &self.results {
            if !r.passed {
                writeln!(
                    f,
                    "  FAIL [{}/{}]: {}",
                    r.category,
                    r.name,
                    r.message.as_deref().unwrap_or("(no message)")
                )?;
            }
        }
        Ok(())
    }
}

/// Run the full conformance suite against a store backend.
///
/// The `factory` is called once per test to create a fresh, empty store,
/// ensuring test isolation.
pub fn run_conformance_suite<S, F>(factory: F) -> ConformanceReport
where
    S: RecordStore<ProbeKey, ProbeRecord>,
    F: Fn() -> S,
{
    let mut results = Vec::new();

    results.extend(lookup::run_lookup_tests(&factory));
    results.extend(upsert::run_upsert_tests(&factory));
    results.extend(remove::run_remove_tests(&factory));
    results.extend(enumerate::run_enumerate_tests(&factory));

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    ConformanceReport {
        results,
        passed,
        failed: total - passed,
        total,
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn key(a: &str, b: &str) -> ProbeKey {
    (a.to_string(), b.to_string())
}

fn record(flag: bool, note: &str) -> ProbeRecord {
    ProbeRecord {
        flag,
        note: note.to_string(),
    }
}

fn expect_eq<T: PartialEq + fmt::Debug>(what: &str, got: T, want: T) -> Result<(), String> {
    if got == want {
        Ok(())
    } else {
        Err(format!("{what}: expected {want:?}, got {got:?}"))
    }
}

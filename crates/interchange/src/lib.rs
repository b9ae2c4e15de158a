//! equipreg-interchange: named calls with positional JSON arguments.
//!
//! Callers address a registry by contract name and a method by its public
//! name (`certify-equipment`, `is-qualified`, ...), passing arguments as a
//! JSON array. [`parse_call`] turns that into a typed [`Call`]; the host
//! executes it and reports a [`Response`]:
//!
//! - mutations: `{"success": true}` or `{"error": <code>}`
//! - reads: a plain JSON value (record or `null`, boolean, integer, ...)
//!
//! Calls that cannot be decoded never reach a registry; they are reported
//! with [`InterchangeError::to_json`].

pub mod deserialize;
pub mod types;

pub use deserialize::{parse_call, InterchangeError};
pub use types::*;

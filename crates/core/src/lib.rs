//! equipreg-core: primitives shared by every equipment registry.
//!
//! A registry is an access-controlled, time-windowed store of validity
//! records. This crate holds the pieces that do not depend on how records
//! are stored:
//!
//! - [`Identity`] and [`Height`] -- the caller principal and logical clock
//!   supplied by the host through [`Environment`]
//! - [`AccessController`] -- single-admin authorization with one-step transfer
//! - [`validity`] -- pure creation, expiry, and due-date checks
//! - [`RegistryError`] -- the stable error taxonomy (codes 100/101/102)

pub mod access;
pub mod env;
pub mod error;
pub mod identity;
pub mod validity;

pub use access::AccessController;
pub use env::{CallContext, Environment};
pub use error::{IdentityError, RegistryError};
pub use identity::{Height, Identity};
pub use validity::Validity;

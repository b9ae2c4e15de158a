//! The two primitives the host supplies to every call.

use crate::identity::{Height, Identity};

/// Read-only view of the host environment for the duration of one call.
pub trait Environment {
    /// The verified principal that submitted the call.
    fn caller(&self) -> &Identity;
    /// The current block height.
    fn clock(&self) -> Height;
}

/// A fixed caller/clock pair. Hosts build one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Identity,
    pub clock: Height,
}

impl CallContext {
    pub fn new(caller: Identity, clock: Height) -> Self {
        CallContext { caller, clock }
    }
}

impl Environment for CallContext {
    fn caller(&self) -> &Identity {
        &self.caller
    }

    fn clock(&self) -> Height {
        self.clock
    }
}

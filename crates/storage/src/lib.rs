pub mod conformance;
mod memory;
mod record;
mod traits;

pub use memory::{MemoryStore, RecordCounter};
pub use record::{Certificate, MaintenanceRecord};
pub use traits::RecordStore;

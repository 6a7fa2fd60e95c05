// Record store module
// Owns the on-disk agent collection and its access operations

pub mod file_store;
pub mod records;

pub use file_store::{AgentRecordStore, StoreError};
pub use records::{AgentCollection, AgentRecord};

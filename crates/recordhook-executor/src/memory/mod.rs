//! In-memory executor.

pub mod store;

pub use store::{MemoryExecutor, StoredRecord};

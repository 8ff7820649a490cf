//! Shared types: entity identifiers and the record maps passed through
//! an update.

pub mod id;
pub mod record;

pub use id::EntityId;
pub use record::{FieldMap, Patch, UpdateOptions};

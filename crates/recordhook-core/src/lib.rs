//! # recordhook-core
//!
//! Core crate for RecordHook. Contains the unified error system,
//! configuration schemas, typed identifiers, the record types that flow
//! through an update (`Patch`, `UpdateOptions`), and the
//! [`MutationExecutor`](traits::MutationExecutor) trait.
//!
//! This crate has **no** internal dependencies on other RecordHook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
pub use types::{EntityId, FieldMap, Patch, UpdateOptions};

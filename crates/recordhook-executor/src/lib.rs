//! # recordhook-executor
//!
//! Mutation executor implementations for RecordHook. Supports two modes:
//!
//! - **simulated**: echoes the patch after a random delay, standing in for
//!   a database round trip
//! - **memory**: merges patches into an in-process keyed store backed by
//!   [dashmap](https://crates.io/crates/dashmap)
//!
//! The executor is selected at runtime based on configuration.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "simulated")]
pub mod simulated;

pub use provider::ExecutorManager;

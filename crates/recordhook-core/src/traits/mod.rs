//! Core traits defined in `recordhook-core` and implemented by other crates.

pub mod executor;

pub use executor::MutationExecutor;

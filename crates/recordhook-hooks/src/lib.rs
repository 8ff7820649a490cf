//! # recordhook-hooks
//!
//! Hook chains for entity updates:
//!
//! - [`HookPoint`] names the two chains an entity owns (before / after update)
//! - [`UpdateHook`] is the async callback contract, [`HookFn`] adapts closures
//! - [`HookChain`] is an append-only, registration-ordered list of named hooks
//! - [`HookChain::run`] awaits every hook in series and tags the first failure
//!   with the failing hook's name

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::{HookFn, HookPoint, HookRecord, UpdateHook};
pub use registry::HookChain;

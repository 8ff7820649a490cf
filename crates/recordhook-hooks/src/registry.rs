//! Hook chain: an append-only list of named hooks in registration order.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::info;

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::types::{Patch, UpdateOptions};

use super::definitions::{HookFn, HookPoint, HookRecord, UpdateHook};

/// Ordered hooks for one [`HookPoint`].
///
/// Execution order is registration order. There is no priority, no
/// removal and no deduplication.
#[derive(Debug, Clone)]
pub struct HookChain {
    point: HookPoint,
    records: Vec<HookRecord>,
}

impl HookChain {
    /// Creates an empty chain for the given hook point.
    pub fn new(point: HookPoint) -> Self {
        Self {
            point,
            records: Vec::new(),
        }
    }

    /// Appends a hook under `name`.
    ///
    /// Fails with a validation error if `name` is blank; the chain is left
    /// unchanged in that case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        hook: Arc<dyn UpdateHook>,
    ) -> AppResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation(format!(
                "{} hook name must not be empty",
                self.point
            )));
        }

        info!(
            hook = %self.point,
            callback = %name,
            position = self.records.len(),
            "Hook registered"
        );

        self.records.push(HookRecord::new(name, hook));
        Ok(())
    }

    /// Appends a closure hook under `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> AppResult<()>
    where
        F: for<'a> Fn(&'a Patch, &'a UpdateOptions) -> BoxFuture<'a, AppResult<()>>
            + Send
            + Sync
            + 'static,
    {
        self.register(name, Arc::new(HookFn::new(f)))
    }

    /// The hook point this chain serves.
    pub fn point(&self) -> HookPoint {
        self.point
    }

    /// Registered names, in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(HookRecord::name).collect()
    }

    /// Registered records, in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &HookRecord> {
        self.records.iter()
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

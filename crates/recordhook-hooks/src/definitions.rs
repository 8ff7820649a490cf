//! Hook point definitions and the update hook contract.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use recordhook_core::result::AppResult;
use recordhook_core::types::{Patch, UpdateOptions};

/// The chains an entity runs around its mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Runs before the mutation executor. A failure aborts the write.
    BeforeUpdate,
    /// Runs after the mutation executor has succeeded.
    AfterUpdate,
}

impl HookPoint {
    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeUpdate => "before_update",
            Self::AfterUpdate => "after_update",
        }
    }

    /// Returns whether this chain runs ahead of the mutation.
    pub fn is_before_hook(&self) -> bool {
        matches!(self, Self::BeforeUpdate)
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An asynchronous callback invoked with an update's patch and options.
///
/// Every hook in a chain receives the same borrowed `patch` and `options`
/// the caller passed to `update`. Only failure is observed; success carries
/// no value.
#[async_trait]
pub trait UpdateHook: Send + Sync {
    /// Run the hook.
    async fn call(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<()>;
}

/// Adapts a closure returning a boxed future into an [`UpdateHook`].
///
/// ```ignore
/// let hook = HookFn::new(|patch, _options| {
///     async move {
///         tracing::info!(fields = patch.len(), "patch seen");
///         Ok(())
///     }
///     .boxed()
/// });
/// ```
pub struct HookFn<F> {
    f: F,
}

impl<F> HookFn<F>
where
    F: for<'a> Fn(&'a Patch, &'a UpdateOptions) -> BoxFuture<'a, AppResult<()>>
        + Send
        + Sync
        + 'static,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> UpdateHook for HookFn<F>
where
    F: for<'a> Fn(&'a Patch, &'a UpdateOptions) -> BoxFuture<'a, AppResult<()>>
        + Send
        + Sync
        + 'static,
{
    async fn call(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<()> {
        (self.f)(patch, options).await
    }
}

/// A hook together with the name it was registered under.
///
/// The name is used only to attribute failures and in log events. It is
/// never used for lookup, and two records may share a name.
#[derive(Clone)]
pub struct HookRecord {
    name: String,
    hook: Arc<dyn UpdateHook>,
}

impl HookRecord {
    pub(crate) fn new(name: String, hook: Arc<dyn UpdateHook>) -> Self {
        Self { name, hook }
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The callback.
    pub fn hook(&self) -> &Arc<dyn UpdateHook> {
        &self.hook
    }
}

impl fmt::Debug for HookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRecord")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

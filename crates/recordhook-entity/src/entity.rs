//! Hook-guarded entity base.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, FieldMap, Patch, UpdateOptions};
use recordhook_hooks::{HookChain, HookPoint, UpdateHook};

/// Position of an update in its linear state machine.
///
/// `BeforeHooks -> Mutate -> AfterHooks -> Done`; a failure in any of the
/// first three ends the update with that failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatePhase {
    /// Running the before-update chain.
    BeforeHooks,
    /// Waiting on the mutation executor.
    Mutate,
    /// Running the after-update chain.
    AfterHooks,
    /// Finished successfully.
    Done,
}

impl UpdatePhase {
    /// Returns the string name of this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeHooks => "before_hooks",
            Self::Mutate => "mutate",
            Self::AfterHooks => "after_hooks",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for UpdatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entity with field state, an identity key and two update hook chains.
///
/// Registration takes `&mut self` and [`update`](Self::update) takes
/// `&self`, so chains cannot change while an update on the same value is
/// running. Each update sees the chains as they stood when it started.
pub struct Entity {
    id: EntityId,
    fields: FieldMap,
    before_update: HookChain,
    after_update: HookChain,
    executor: Arc<dyn MutationExecutor>,
}

impl Entity {
    /// Creates an entity with a fresh identifier, seeded with `fields`.
    pub fn new(executor: Arc<dyn MutationExecutor>, fields: FieldMap) -> Self {
        Self::with_id(EntityId::new(), executor, fields)
    }

    /// Creates an entity with an explicit identifier.
    pub fn with_id(id: EntityId, executor: Arc<dyn MutationExecutor>, fields: FieldMap) -> Self {
        Self {
            id,
            fields,
            before_update: HookChain::new(HookPoint::BeforeUpdate),
            after_update: HookChain::new(HookPoint::AfterUpdate),
            executor,
        }
    }

    /// Identity key used to address the mutation executor.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Field state as seeded at construction.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Looks up a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Hooks that run before the mutation, in execution order.
    pub fn before_update_hooks(&self) -> &HookChain {
        &self.before_update
    }

    /// Hooks that run after the mutation, in execution order.
    pub fn after_update_hooks(&self) -> &HookChain {
        &self.after_update
    }

    /// Appends a hook to the before-update chain.
    pub fn register_before_update_hook(
        &mut self,
        name: impl Into<String>,
        hook: Arc<dyn UpdateHook>,
    ) -> AppResult<()> {
        self.before_update.register(name, hook)
    }

    /// Appends a hook to the after-update chain.
    pub fn register_after_update_hook(
        &mut self,
        name: impl Into<String>,
        hook: Arc<dyn UpdateHook>,
    ) -> AppResult<()> {
        self.after_update.register(name, hook)
    }

    /// Appends a closure to the before-update chain.
    pub fn register_before_update_fn<F>(&mut self, name: impl Into<String>, f: F) -> AppResult<()>
    where
        F: for<'a> Fn(&'a Patch, &'a UpdateOptions) -> BoxFuture<'a, AppResult<()>>
            + Send
            + Sync
            + 'static,
    {
        self.before_update.register_fn(name, f)
    }

    /// Appends a closure to the after-update chain.
    pub fn register_after_update_fn<F>(&mut self, name: impl Into<String>, f: F) -> AppResult<()>
    where
        F: for<'a> Fn(&'a Patch, &'a UpdateOptions) -> BoxFuture<'a, AppResult<()>>
            + Send
            + Sync
            + 'static,
    {
        self.after_update.register_fn(name, f)
    }

    /// Runs the before chain, the mutation executor, then the after chain.
    ///
    /// Returns the executor's result. Any failure ends the update at once:
    /// a before-hook failure skips the write and the after chain, an
    /// executor failure skips the after chain. Hook failures carry the
    /// failing hook's name; nothing is retried or rolled back.
    pub async fn update(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<Patch> {
        debug!(
            entity_id = %self.id,
            fields = patch.len(),
            before = self.before_update.len(),
            after = self.after_update.len(),
            "Update started"
        );

        self.before_update
            .run(patch, options)
            .await
            .inspect_err(|e| self.log_failure(UpdatePhase::BeforeHooks, e))?;

        let applied = self
            .executor
            .execute(&self.id, patch)
            .await
            .inspect_err(|e| self.log_failure(UpdatePhase::Mutate, e))?;

        self.after_update
            .run(patch, options)
            .await
            .inspect_err(|e| self.log_failure(UpdatePhase::AfterHooks, e))?;

        debug!(entity_id = %self.id, phase = %UpdatePhase::Done, "Update finished");
        Ok(applied)
    }

    fn log_failure(&self, phase: UpdatePhase, err: &AppError) {
        warn!(
            entity_id = %self.id,
            executor = self.executor.name(),
            phase = %phase,
            callback = err.callback_name().unwrap_or("-"),
            error = %err,
            "Update failed"
        );
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("before_update", &self.before_update)
            .field("after_update", &self.after_update)
            .field("executor", &self.executor.name())
            .finish()
    }
}

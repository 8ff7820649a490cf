//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, FieldMap, Patch, UpdateOptions};
use recordhook_entity::Entity;
use recordhook_hooks::{HookFn, UpdateHook};

/// Names of hooks in the order they finished.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Address of a borrowed value, for reference-identity checks.
pub fn addr<T>(value: &T) -> usize {
    value as *const T as usize
}

/// Executor that records every call and answers with a fixed outcome.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: AtomicUsize,
    seen: Mutex<Vec<(EntityId, usize)>>,
    response: Option<Patch>,
    failure: Option<AppError>,
}

impl RecordingExecutor {
    /// Echoes the patch it is given.
    pub fn echo() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Always answers with `response`, whatever the patch.
    pub fn responding(response: Patch) -> Arc<Self> {
        Arc::new(Self {
            response: Some(response),
            ..Self::default()
        })
    }

    /// Always fails with `err`.
    pub fn failing(err: AppError) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(err),
            ..Self::default()
        })
    }

    /// Number of execute calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(id, patch address)` for every call.
    pub fn seen(&self) -> Vec<(EntityId, usize)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl MutationExecutor for RecordingExecutor {
    async fn execute(&self, id: &EntityId, patch: &Patch) -> AppResult<Patch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((*id, addr(patch)));
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.response.clone().unwrap_or_else(|| patch.clone()))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Entity seeded with a couple of fields, wired to `executor`.
pub fn entity_with(executor: Arc<RecordingExecutor>) -> Entity {
    let mut fields = FieldMap::new();
    fields.insert("name".into(), serde_json::json!("jared"));
    fields.insert("favoriteColor".into(), serde_json::json!("yellow"));
    Entity::new(executor, fields)
}

/// Hook that waits `delay_ms`, then appends `name` to `log`.
pub fn recording_hook(log: &CallLog, name: &'static str, delay_ms: u64) -> Arc<dyn UpdateHook> {
    let log = log.clone();
    Arc::new(HookFn::new(move |_patch, _options| {
        let log = log.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            log.lock().unwrap().push(name.to_string());
            Ok(())
        }
        .boxed()
    }))
}

/// Hook that always fails with a validation error carrying `message`.
pub fn failing_hook(message: &'static str) -> Arc<dyn UpdateHook> {
    Arc::new(HookFn::new(move |_patch, _options| {
        async move { Err(AppError::validation(message)) }.boxed()
    }))
}

/// Hook that captures the addresses of the arguments it receives.
#[derive(Default)]
pub struct ArgCapture {
    seen: Mutex<Vec<(usize, usize)>>,
}

impl ArgCapture {
    /// `(patch address, options address)` for every call.
    pub fn seen(&self) -> Vec<(usize, usize)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdateHook for ArgCapture {
    async fn call(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<()> {
        self.seen.lock().unwrap().push((addr(patch), addr(options)));
        Ok(())
    }
}

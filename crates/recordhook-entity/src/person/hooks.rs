//! Hooks a [`Person`](super::Person) registers on itself.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::types::{EntityId, Patch, UpdateOptions};
use recordhook_hooks::UpdateHook;

/// Upper bound accepted for a patched `age`.
pub const MAX_AGE: i64 = 150;

/// Rejects a patch whose `age` is not an integer in `0..=MAX_AGE`.
///
/// Patches that do not touch `age` pass through.
#[derive(Debug, Default)]
pub struct ValidateAge;

#[async_trait]
impl UpdateHook for ValidateAge {
    async fn call(&self, patch: &Patch, _options: &UpdateOptions) -> AppResult<()> {
        let Some(value) = patch.get_data("age") else {
            return Ok(());
        };

        match value.as_i64() {
            Some(age) if (0..=MAX_AGE).contains(&age) => Ok(()),
            Some(age) => Err(AppError::validation(format!(
                "age must be between 0 and {MAX_AGE}, got {age}"
            ))),
            None => Err(AppError::validation(format!(
                "age must be an integer, got {value}"
            ))),
        }
    }
}

/// One applied update, as seen by [`RecordAudit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entity that was updated.
    pub entity_id: EntityId,
    /// Patched field names, in key order.
    pub fields: Vec<String>,
    /// Value of the `updatingUser` option, when given.
    pub updated_by: Option<String>,
}

/// Shared, append-only audit log.
pub type AuditTrail = Arc<Mutex<Vec<AuditEntry>>>;

/// Appends an [`AuditEntry`] after every successful write.
#[derive(Debug)]
pub struct RecordAudit {
    entity_id: EntityId,
    trail: AuditTrail,
}

impl RecordAudit {
    /// Creates an audit hook writing to `trail` for `entity_id`.
    pub fn new(entity_id: EntityId, trail: AuditTrail) -> Self {
        Self { entity_id, trail }
    }
}

#[async_trait]
impl UpdateHook for RecordAudit {
    async fn call(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<()> {
        let entry = AuditEntry {
            entity_id: self.entity_id,
            fields: patch.iter().map(|(k, _)| k.clone()).collect(),
            updated_by: options.get_string("updatingUser").map(str::to_string),
        };
        debug!(entity_id = %self.entity_id, fields = entry.fields.len(), "Audit entry recorded");
        self.trail.lock().await.push(entry);
        Ok(())
    }
}

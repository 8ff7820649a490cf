//! Person entity model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, Patch, UpdateOptions};

use super::hooks::{AuditEntry, AuditTrail, RecordAudit, ValidateAge};
use crate::entity::Entity;

/// Typed field set of a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    /// Favorite color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
}

/// A person backed by a hook-guarded [`Entity`].
///
/// Construction registers `validateAge` on the before chain and
/// `recordAudit` on the after chain. Callers may append more hooks through
/// [`entity_mut`](Self::entity_mut).
#[derive(Debug)]
pub struct Person {
    fields: PersonFields,
    entity: Entity,
    audit: AuditTrail,
}

impl Person {
    /// Creates a person with a fresh identifier.
    pub fn new(executor: Arc<dyn MutationExecutor>, fields: PersonFields) -> AppResult<Self> {
        Self::with_id(EntityId::new(), executor, fields)
    }

    /// Creates a person with an explicit identifier.
    pub fn with_id(
        id: EntityId,
        executor: Arc<dyn MutationExecutor>,
        fields: PersonFields,
    ) -> AppResult<Self> {
        let map = match serde_json::to_value(&fields)? {
            Value::Object(map) => map,
            other => {
                return Err(AppError::internal(format!(
                    "person fields serialized to non-object: {other}"
                )));
            }
        };

        let audit = AuditTrail::default();
        let mut entity = Entity::with_id(id, executor, map);
        entity.register_before_update_hook("validateAge", Arc::new(ValidateAge))?;
        entity.register_after_update_hook(
            "recordAudit",
            Arc::new(RecordAudit::new(id, audit.clone())),
        )?;

        Ok(Self {
            fields,
            entity,
            audit,
        })
    }

    /// Identity key.
    pub fn id(&self) -> EntityId {
        self.entity.id()
    }

    /// Display name.
    pub fn name(&self) -> Option<&str> {
        self.fields.name.as_deref()
    }

    /// Age in years.
    pub fn age(&self) -> Option<i64> {
        self.fields.age
    }

    /// Favorite color.
    pub fn favorite_color(&self) -> Option<&str> {
        self.fields.favorite_color.as_deref()
    }

    /// Typed fields as constructed.
    pub fn fields(&self) -> &PersonFields {
        &self.fields
    }

    /// The underlying entity.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// The underlying entity, for registering further hooks.
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// Applies `patch` through the entity's hook chains.
    pub async fn update(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<Patch> {
        self.entity.update(patch, options).await
    }

    /// Audit entries recorded so far, oldest first.
    pub async fn audit_trail(&self) -> Vec<AuditEntry> {
        self.audit.lock().await.clone()
    }
}

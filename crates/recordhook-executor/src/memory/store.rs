//! In-memory executor using the dashmap crate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, FieldMap, Patch};

/// Current state of one record in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Merged fields of every patch applied so far.
    pub fields: FieldMap,
    /// Number of patches applied.
    pub version: u64,
    /// When the last patch was applied.
    pub updated_at: DateTime<Utc>,
}

/// Keyed in-memory store that merges each patch into its record.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor {
    records: Arc<DashMap<EntityId, StoredRecord>>,
    writes: Arc<AtomicU64>,
    read_only: Arc<AtomicBool>,
}

impl MemoryExecutor {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the record for `id`, if any patch has been applied to it.
    pub fn get(&self, id: &EntityId) -> Option<StoredRecord> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of successful writes across all records.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// While read-only, every write fails with a persistence error.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

#[async_trait]
impl MutationExecutor for MemoryExecutor {
    async fn execute(&self, id: &EntityId, patch: &Patch) -> AppResult<Patch> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(AppError::persistence(format!(
                "store is read-only, rejected write to {id}"
            )));
        }

        let version = {
            let mut entry = self.records.entry(*id).or_insert_with(|| StoredRecord {
                fields: FieldMap::new(),
                version: 0,
                updated_at: Utc::now(),
            });
            let record = entry.value_mut();
            for (key, value) in patch.iter() {
                record.fields.insert(key.clone(), value.clone());
            }
            record.version += 1;
            record.updated_at = Utc::now();
            record.version
        };

        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!(entity_id = %id, version, fields = patch.len(), "Record written");
        Ok(patch.clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

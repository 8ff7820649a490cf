//! Mutation executor trait: the write an entity update wraps.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{EntityId, Patch};

/// Applies a patch to the record addressed by an entity identifier.
///
/// Implementations decide what storage is touched and how long it takes.
/// Callers only rely on the future eventually resolving with the applied
/// patch or failing. No retry is expected from callers; an implementation
/// that wants retries performs them itself.
#[async_trait]
pub trait MutationExecutor: Send + Sync + 'static {
    /// Apply `patch` to the record identified by `id` and return the applied patch.
    async fn execute(&self, id: &EntityId, patch: &Patch) -> AppResult<Patch>;

    /// Short name used in log events.
    fn name(&self) -> &str {
        "executor"
    }
}

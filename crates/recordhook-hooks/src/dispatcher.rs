//! Hook dispatcher: runs a chain strictly in series.
//!
//! - Hooks are awaited one at a time in registration order; hook `n + 1`
//!   starts only after hook `n` has completed.
//! - Every hook receives the same `patch` and `options` borrows.
//! - The first failure is tagged with the failing hook's name and returned.
//!   Hooks after it are never invoked.

use tracing::{debug, warn};

use recordhook_core::result::AppResult;
use recordhook_core::types::{Patch, UpdateOptions};

use super::registry::HookChain;

impl HookChain {
    /// Runs every hook in this chain with `patch` and `options`.
    pub async fn run(&self, patch: &Patch, options: &UpdateOptions) -> AppResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        debug!(
            hook = %self.point(),
            handler_count = self.len(),
            "Dispatching hook chain"
        );

        for (index, record) in self.iter().enumerate() {
            debug!(hook = %self.point(), callback = %record.name(), index, "Invoking hook");

            if let Err(err) = record.hook().call(patch, options).await {
                warn!(
                    hook = %self.point(),
                    callback = %record.name(),
                    index,
                    error = %err,
                    "Hook failed, aborting chain"
                );
                return Err(err.with_callback_name(record.name()));
            }
        }

        Ok(())
    }
}

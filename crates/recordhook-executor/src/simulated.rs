//! Executor that simulates a database write with random latency.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use recordhook_core::config::executor::ExecutorConfig;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, Patch};

/// Sleeps a uniformly random duration, then echoes a copy of the patch.
///
/// Never fails.
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl SimulatedExecutor {
    /// Creates an executor delaying between `min_delay_ms` and
    /// `max_delay_ms` inclusive. An upper bound below the lower bound is
    /// raised to it.
    pub fn new(min_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            min_delay_ms,
            max_delay_ms: max_delay_ms.max(min_delay_ms),
        }
    }

    /// Creates an executor from configuration.
    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self::new(config.min_delay_ms, config.max_delay_ms)
    }

    /// Inclusive latency bounds in milliseconds.
    pub fn delay_range_ms(&self) -> (u64, u64) {
        (self.min_delay_ms, self.max_delay_ms)
    }

    fn next_delay(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_delay_ms..=self.max_delay_ms);
        Duration::from_millis(ms)
    }
}

impl Default for SimulatedExecutor {
    fn default() -> Self {
        Self::from_config(&ExecutorConfig::default())
    }
}

#[async_trait]
impl MutationExecutor for SimulatedExecutor {
    async fn execute(&self, id: &EntityId, patch: &Patch) -> AppResult<Patch> {
        let delay = self.next_delay();
        debug!(entity_id = %id, delay_ms = delay.as_millis() as u64, "Simulating write");
        tokio::time::sleep(delay).await;
        Ok(patch.clone())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

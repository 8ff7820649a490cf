//! Executor manager that dispatches to the configured executor.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use recordhook_core::config::executor::{ExecutorConfig, ExecutorKind};
use recordhook_core::error::AppError;
use recordhook_core::result::AppResult;
use recordhook_core::traits::MutationExecutor;
use recordhook_core::types::{EntityId, Patch};

/// Wraps the configured mutation executor.
#[derive(Clone)]
pub struct ExecutorManager {
    inner: Arc<dyn MutationExecutor>,
}

impl ExecutorManager {
    /// Create an executor manager from configuration.
    pub fn new(config: &ExecutorConfig) -> AppResult<Self> {
        let inner: Arc<dyn MutationExecutor> = match config.kind {
            #[cfg(feature = "simulated")]
            ExecutorKind::Simulated => {
                info!(
                    min_delay_ms = config.min_delay_ms,
                    max_delay_ms = config.max_delay_ms,
                    "Initializing simulated executor"
                );
                Arc::new(crate::simulated::SimulatedExecutor::from_config(config))
            }
            #[cfg(feature = "memory")]
            ExecutorKind::Memory => {
                info!("Initializing in-memory executor");
                Arc::new(crate::memory::MemoryExecutor::new())
            }
            #[allow(unreachable_patterns)]
            other => {
                return Err(AppError::configuration(format!(
                    "Executor '{other}' is not compiled into this build"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create an executor manager from an existing executor (for testing).
    pub fn from_executor(executor: Arc<dyn MutationExecutor>) -> Self {
        Self { inner: executor }
    }

    /// Shared handle to the inner executor, for wiring into entities.
    pub fn executor(&self) -> Arc<dyn MutationExecutor> {
        self.inner.clone()
    }
}

impl std::fmt::Debug for ExecutorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorManager")
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[async_trait]
impl MutationExecutor for ExecutorManager {
    async fn execute(&self, id: &EntityId, patch: &Patch) -> AppResult<Patch> {
        self.inner.execute(id, patch).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

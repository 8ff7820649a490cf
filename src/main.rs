//! RecordHook demo: wires a person entity to the configured executor and
//! runs a guarded update through its hook chains.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use recordhook_core::config::AppConfig;
use recordhook_core::error::AppError;
use recordhook_core::types::{Patch, UpdateOptions};
use recordhook_entity::person::{Person, PersonFields};
use recordhook_executor::ExecutorManager;
use recordhook_hooks::UpdateHook;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(callback = e.callback_name().unwrap_or("-"), "Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("RECORDHOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Logs every patch it sees.
struct TracePatch;

#[async_trait::async_trait]
impl UpdateHook for TracePatch {
    async fn call(&self, patch: &Patch, options: &UpdateOptions) -> Result<(), AppError> {
        let fields: Vec<&str> = patch.iter().map(|(k, _)| k.as_str()).collect();
        tracing::info!(
            fields = ?fields,
            updating_user = options.get_string("updatingUser").unwrap_or("-"),
            "Patch passed after-update chain"
        );
        Ok(())
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RecordHook demo v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Executor: {}", config.executor.kind);

    let executor = ExecutorManager::new(&config.executor)?;

    let mut person = Person::new(
        executor.executor(),
        PersonFields {
            name: Some("jared".to_string()),
            age: Some(34),
            favorite_color: Some("yellow".to_string()),
        },
    )?;
    person
        .entity_mut()
        .register_after_update_hook("tracePatch", Arc::new(TracePatch))?;

    let options = UpdateOptions::new().with_string("updatingUser", "jared");

    let patch = Patch::new().with_string("name", "johanna");
    let applied = person.update(&patch, &options).await?;
    tracing::info!(id = %person.id(), applied = applied.len(), "Update applied");

    let rejected = Patch::new().with_int("age", -3);
    match person.update(&rejected, &options).await {
        Ok(_) => tracing::warn!("Invalid age was accepted"),
        Err(e) => tracing::info!(
            callback = e.callback_name().unwrap_or("-"),
            "Update rejected as expected: {}",
            e
        ),
    }

    for entry in person.audit_trail().await {
        tracing::info!(
            fields = ?entry.fields,
            updated_by = entry.updated_by.as_deref().unwrap_or("-"),
            "Audit"
        );
    }

    Ok(())
}

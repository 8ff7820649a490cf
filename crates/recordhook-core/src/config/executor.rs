//! Mutation executor configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which executor implementation to wire entities to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Echoes the patch back after a random delay.
    #[default]
    Simulated,
    /// Merges patches into an in-memory keyed store.
    Memory,
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Executor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Executor implementation.
    #[serde(default)]
    pub kind: ExecutorKind,
    /// Lower bound of the simulated write latency, in milliseconds.
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,
    /// Upper bound of the simulated write latency, in milliseconds.
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            kind: ExecutorKind::default(),
            min_delay_ms: default_min_delay(),
            max_delay_ms: default_max_delay(),
        }
    }
}

fn default_min_delay() -> u64 {
    200
}

fn default_max_delay() -> u64 {
    500
}

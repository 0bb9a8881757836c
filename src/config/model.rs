// src/config/model.rs

use serde::Deserialize;

use crate::types::{PassName, QueueIndex};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// queue_count = 3
/// queue_names = ["graphics", "compute", "transfer"]
///
/// [[pass]]
/// name = "Lighting"
/// queue = 0
/// after = ["GBuffer", "ShadowMap"]
/// ```
///
/// Passes are an array of tables so that their registration order is the
/// file order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub pass: Vec<PassConfig>,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`,
/// which guarantees the passes form a schedulable graph.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub pass: Vec<PassConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, pass: Vec<PassConfig>) -> Self {
        Self { config, pass }
    }

    /// Display label for a queue: its configured name, or `Queue <n>`.
    pub fn queue_label(&self, queue: QueueIndex) -> String {
        self.config.queue_label(queue)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Number of execution queues. Pass queues must lie in `0..queue_count`.
    #[serde(default = "default_queue_count")]
    pub queue_count: usize,

    /// Optional human-readable queue names, one per queue.
    #[serde(default)]
    pub queue_names: Vec<String>,
}

fn default_queue_count() -> usize {
    1
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            queue_count: default_queue_count(),
            queue_names: Vec::new(),
        }
    }
}

impl ConfigSection {
    pub fn queue_label(&self, queue: QueueIndex) -> String {
        match self.queue_names.get(queue) {
            Some(name) => name.clone(),
            None => format!("Queue {queue}"),
        }
    }
}

/// One `[[pass]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PassConfig {
    pub name: PassName,

    /// Queue this pass is submitted to.
    #[serde(default)]
    pub queue: QueueIndex,

    /// Passes that must complete before this one, in declaration order.
    #[serde(default, alias = "dependencies")]
    pub after: Vec<PassName>,
}

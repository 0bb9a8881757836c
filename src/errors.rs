// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Duplicate pass name: {0}")]
    DuplicateName(String),

    #[error("Pass '{pass}' depends on unknown pass '{dependency}'")]
    UnknownDependency { pass: String, dependency: String },

    #[error("Pass '{pass}' is assigned to queue {queue}, but only {queue_count} queue(s) exist")]
    QueueOutOfRange {
        pass: String,
        queue: usize,
        queue_count: usize,
    },

    #[error("Queue count must be at least 1")]
    InvalidQueueCount,

    /// Kahn's algorithm could not order every pass. `unresolved` lists the
    /// passes that never became ready: the cycle members and everything
    /// downstream of them.
    #[error("Cycle detected in pass graph; unresolved passes: {}", .unresolved.join(", "))]
    Cycle { unresolved: Vec<String> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SyncdagError>;

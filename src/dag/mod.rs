// src/dag/mod.rs

//! Pass graph representation and scheduling.
//!
//! - [`registry`] resolves name-based pass descriptors into a [`PassGraph`].
//! - [`graph`] holds the immutable, arena-indexed pass graph.
//! - [`topology`] builds forward adjacency and the Kahn topological order.
//! - [`levels`] computes longest-dependency-chain depths.
//! - [`progress`] computes per-queue progress vectors.
//! - [`sync`] greedily picks the cross-queue syncs each pass needs.
//! - [`scheduler`] runs the stages in order and produces a [`Schedule`].

pub mod graph;
pub mod levels;
pub mod progress;
pub mod registry;
pub mod scheduler;
pub mod sync;
pub mod topology;

pub use graph::{Pass, PassGraph};
pub use levels::compute_levels;
pub use progress::{ProgressVector, compute_progress_vectors};
pub use registry::PassDesc;
pub use scheduler::{PassPlan, Schedule, Scheduler};
pub use sync::{SyncSelection, required_queues, select_syncs};
pub use topology::{Adjacency, topological_order};

// src/dag/sync.rs

//! Greedy selection of the cross-queue synchronizations a pass needs.
//!
//! A pass must wait on every other queue whose progress component is
//! non-zero. Synchronizing with a direct dependency `d` satisfies queue `q`
//! whenever `d[q] >= pass[q]`, so the problem is a set cover over the
//! required queues. We use the classic greedy approximation: repeatedly take
//! the dependency covering the most still-uncovered queues, first declared
//! wins ties.

use std::collections::BTreeSet;

use crate::dag::graph::PassGraph;
use crate::dag::progress::ProgressVector;
use crate::types::{PassId, QueueIndex};

/// Outcome of sync selection for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSelection {
    /// Direct dependencies to synchronize with, in selection order.
    pub syncs: Vec<PassId>,
    /// Required queues no direct dependency could cover.
    pub uncovered: Vec<QueueIndex>,
}

impl SyncSelection {
    /// `true` if every required queue is covered by `syncs`.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// Queues other than the pass's own that it must wait on.
pub fn required_queues(
    graph: &PassGraph,
    vectors: &[ProgressVector],
    id: PassId,
) -> BTreeSet<QueueIndex> {
    let own_queue = graph.pass(id).queue;
    let vector = &vectors[id];

    (0..graph.queue_count())
        .filter(|&q| q != own_queue && vector[q] > 0)
        .collect()
}

/// Pick the dependencies of `id` to synchronize with.
///
/// `vectors` must hold the progress vector of every pass (see
/// [`crate::dag::compute_progress_vectors`]).
pub fn select_syncs(graph: &PassGraph, vectors: &[ProgressVector], id: PassId) -> SyncSelection {
    let target = &vectors[id];
    let mut required = required_queues(graph, vectors, id);
    let mut candidates: Vec<PassId> = graph.pass(id).deps.clone();
    let mut syncs = Vec::new();

    while !required.is_empty() {
        let mut best: Option<(usize, BTreeSet<QueueIndex>)> = None;

        for (slot, &dep) in candidates.iter().enumerate() {
            let coverage: BTreeSet<QueueIndex> = required
                .iter()
                .copied()
                .filter(|&q| vectors[dep][q] >= target[q])
                .collect();

            let best_len = best.as_ref().map_or(0, |(_, c)| c.len());
            if coverage.len() > best_len {
                best = Some((slot, coverage));
            }
        }

        let Some((slot, coverage)) = best else {
            break;
        };

        syncs.push(candidates.remove(slot));
        for q in &coverage {
            required.remove(q);
        }
    }

    SyncSelection {
        syncs,
        uncovered: required.into_iter().collect(),
    }
}

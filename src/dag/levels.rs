// src/dag/levels.rs

use crate::dag::graph::PassGraph;
use crate::types::PassId;

/// Longest dependency-chain depth of every pass, indexed by [`PassId`].
///
/// `order` must be a topological order of `graph`; each level is then final
/// by the time any dependent reads it.
pub fn compute_levels(graph: &PassGraph, order: &[PassId]) -> Vec<u32> {
    let mut levels = vec![0u32; graph.len()];

    for &id in order {
        let level = graph
            .pass(id)
            .deps
            .iter()
            .map(|&dep| levels[dep] + 1)
            .max()
            .unwrap_or(0);
        levels[id] = level;
    }

    levels
}

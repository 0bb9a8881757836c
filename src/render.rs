// src/render.rs

//! Graphviz DOT export of a pass graph.
//!
//! This is the hand-off point for visualization tools: nodes are passes
//! labelled with their queue, edges point from a dependency to its
//! dependent. Edges that a [`Schedule`] recommends synchronizing on are
//! labelled `sync`. Turning the DOT text into an image is left to the caller.

use std::collections::HashSet;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::{PassGraph, Schedule};

const SYNC_LABEL: &str = "sync";

/// Build a petgraph view of the pass graph.
///
/// Node indices match [`crate::types::PassId`]s.
pub fn to_petgraph(graph: &PassGraph, schedule: Option<&Schedule>) -> DiGraph<String, &'static str> {
    let mut out = DiGraph::with_capacity(graph.len(), graph.edges().count());

    for pass in graph.passes() {
        out.add_node(format!("{} (Q{})", pass.name, pass.queue));
    }

    let synced: HashSet<(&str, &str)> = schedule
        .map(|s| {
            s.plans()
                .iter()
                .flat_map(|p| p.syncs.iter().map(move |dep| (dep.as_str(), p.name.as_str())))
                .collect()
        })
        .unwrap_or_default();

    for (dep, pass) in graph.edges() {
        let key = (graph.name_of(dep), graph.name_of(pass));
        let label = if synced.contains(&key) { SYNC_LABEL } else { "" };
        out.add_edge(NodeIndex::new(dep), NodeIndex::new(pass), label);
    }

    out
}

/// Render the pass graph as DOT text.
pub fn to_dot(graph: &PassGraph, schedule: Option<&Schedule>) -> String {
    let g = to_petgraph(graph, schedule);
    format!("{}", Dot::new(&g))
}

// src/dag/topology.rs

//! Forward adjacency and Kahn's topological sort.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::dag::graph::PassGraph;
use crate::errors::{Result, SyncdagError};
use crate::types::PassId;

/// Forward adjacency plus in-degree counts, derived from the dependency lists.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// `dependents[d]` lists every pass that declares `d` as a dependency,
    /// in registration order of the dependent.
    dependents: Vec<Vec<PassId>>,
    /// Number of entries in each pass's own dependency list.
    in_degree: Vec<usize>,
}

impl Adjacency {
    pub fn build(graph: &PassGraph) -> Self {
        let mut dependents = vec![Vec::new(); graph.len()];
        let mut in_degree = vec![0; graph.len()];

        for (dep, pass) in graph.edges() {
            dependents[dep].push(pass);
            in_degree[pass] += 1;
        }

        Self {
            dependents,
            in_degree,
        }
    }

    pub fn dependents_of(&self, id: PassId) -> &[PassId] {
        &self.dependents[id]
    }

    pub fn in_degree(&self, id: PassId) -> usize {
        self.in_degree[id]
    }
}

/// Order all passes so that each one follows its dependencies.
///
/// Ready passes are processed FIFO, seeded in registration order. Fails with
/// [`SyncdagError::Cycle`] when some passes never become ready.
pub fn topological_order(graph: &PassGraph) -> Result<Vec<PassId>> {
    let adjacency = Adjacency::build(graph);
    let mut in_degree = adjacency.in_degree.clone();

    let mut ready: VecDeque<PassId> = (0..graph.len()).filter(|&id| in_degree[id] == 0).collect();
    let mut order = Vec::with_capacity(graph.len());

    while let Some(id) = ready.pop_front() {
        order.push(id);
        for &dependent in adjacency.dependents_of(id) {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                ready.push_back(dependent);
            }
        }
    }

    if order.len() != graph.len() {
        let unresolved: Vec<String> = (0..graph.len())
            .filter(|&id| in_degree[id] > 0)
            .map(|id| graph.name_of(id).to_string())
            .collect();
        warn!(
            ordered = order.len(),
            total = graph.len(),
            ?unresolved,
            "pass graph contains a cycle"
        );
        return Err(SyncdagError::Cycle { unresolved });
    }

    debug!(passes = order.len(), "topological order computed");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::PassDesc;

    fn names(graph: &PassGraph, order: &[PassId]) -> Vec<String> {
        order.iter().map(|&id| graph.name_of(id).to_string()).collect()
    }

    #[test]
    fn adjacency_counts_declared_dependencies() {
        let graph = PassGraph::new(
            vec![
                PassDesc::new("A", 0, &[]),
                PassDesc::new("B", 0, &["A"]),
                PassDesc::new("C", 0, &["A", "B"]),
            ],
            1,
        )
        .unwrap();
        let adj = Adjacency::build(&graph);

        assert_eq!(adj.in_degree(0), 0);
        assert_eq!(adj.in_degree(2), 2);
        assert_eq!(adj.dependents_of(0), &[1, 2]);
        assert_eq!(adj.dependents_of(1), &[2]);
    }

    #[test]
    fn ties_follow_registration_order() {
        let graph = PassGraph::new(
            vec![
                PassDesc::new("Late", 0, &["Root"]),
                PassDesc::new("Root", 0, &[]),
                PassDesc::new("Other", 1, &[]),
            ],
            2,
        )
        .unwrap();

        let order = topological_order(&graph).unwrap();
        assert_eq!(names(&graph, &order), vec!["Root", "Other", "Late"]);
    }

    #[test]
    fn two_pass_cycle_is_rejected() {
        let graph = PassGraph::new(
            vec![PassDesc::new("A", 0, &["B"]), PassDesc::new("B", 0, &["A"])],
            1,
        )
        .unwrap();

        match topological_order(&graph) {
            Err(SyncdagError::Cycle { unresolved }) => {
                assert_eq!(unresolved, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected Cycle, got {other:?}"),
        }
    }

    #[test]
    fn downstream_of_cycle_is_reported_unresolved() {
        let graph = PassGraph::new(
            vec![
                PassDesc::new("Free", 0, &[]),
                PassDesc::new("A", 0, &["B", "Free"]),
                PassDesc::new("B", 0, &["A"]),
                PassDesc::new("Tail", 0, &["B"]),
            ],
            1,
        )
        .unwrap();

        match topological_order(&graph) {
            Err(SyncdagError::Cycle { unresolved }) => {
                assert_eq!(unresolved, vec!["A", "B", "Tail"]);
            }
            other => panic!("expected Cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let graph = PassGraph::new(vec![PassDesc::new("A", 0, &["A"])], 1).unwrap();
        assert!(matches!(
            topological_order(&graph),
            Err(SyncdagError::Cycle { .. })
        ));
    }

    #[test]
    fn duplicated_dependency_entries_still_order() {
        let graph = PassGraph::new(
            vec![PassDesc::new("A", 0, &[]), PassDesc::new("B", 0, &["A", "A"])],
            1,
        )
        .unwrap();
        let order = topological_order(&graph).unwrap();
        assert_eq!(names(&graph, &order), vec!["A", "B"]);
    }
}

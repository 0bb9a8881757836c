// src/dag/graph.rs

use std::collections::HashMap;

use crate::types::{PassId, PassName, QueueIndex};

/// A registered pass with its dependencies resolved to arena ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
    pub name: PassName,
    pub queue: QueueIndex,
    /// Direct dependencies, in declaration order.
    pub deps: Vec<PassId>,
}

/// Immutable pass graph produced by the registry.
///
/// Passes live in an arena indexed by [`PassId`] (registration order). The
/// graph is not known to be acyclic until [`crate::dag::topological_order`]
/// has succeeded on it.
#[derive(Debug, Clone)]
pub struct PassGraph {
    pub(crate) passes: Vec<Pass>,
    pub(crate) index: HashMap<PassName, PassId>,
    pub(crate) queue_count: usize,
}

impl PassGraph {
    pub fn queue_count(&self) -> usize {
        self.queue_count
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// All passes in registration order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    pub fn pass(&self, id: PassId) -> &Pass {
        &self.passes[id]
    }

    pub fn id_of(&self, name: &str) -> Option<PassId> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, id: PassId) -> &str {
        &self.passes[id].name
    }

    /// Pass names in registration order.
    pub fn pass_names(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|p| p.name.as_str())
    }

    /// Immediate dependencies of a pass, by name, in declaration order.
    ///
    /// Returns an empty vector for unknown names.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.id_of(name)
            .map(|id| {
                self.passes[id]
                    .deps
                    .iter()
                    .map(|&d| self.name_of(d))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Direct dependency edges as `(dependency, dependent)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (PassId, PassId)> + '_ {
        self.passes
            .iter()
            .enumerate()
            .flat_map(|(id, p)| p.deps.iter().map(move |&dep| (dep, id)))
    }
}

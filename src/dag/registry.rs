// src/dag/registry.rs

//! Pass registration: turns name-based descriptors into a [`PassGraph`].

use std::collections::HashMap;

use tracing::debug;

use crate::config::model::{ConfigFile, PassConfig};
use crate::dag::graph::{Pass, PassGraph};
use crate::errors::{Result, SyncdagError};
use crate::types::{PassName, QueueIndex};

/// Unresolved description of a pass: dependencies are still names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassDesc {
    pub name: PassName,
    pub queue: QueueIndex,
    pub deps: Vec<PassName>,
}

impl PassDesc {
    pub fn new<S: Into<PassName>>(name: S, queue: QueueIndex, deps: &[&str]) -> Self {
        Self {
            name: name.into(),
            queue,
            deps: deps.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl From<&PassConfig> for PassDesc {
    fn from(cfg: &PassConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            queue: cfg.queue,
            deps: cfg.after.clone(),
        }
    }
}

impl PassGraph {
    /// Register a list of passes.
    ///
    /// Fails on a zero queue count, duplicate names, out-of-range queues and
    /// unknown dependency names. Acyclicity is *not* checked here.
    pub fn new<I>(descs: I, queue_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = PassDesc>,
    {
        if queue_count == 0 {
            return Err(SyncdagError::InvalidQueueCount);
        }

        let descs: Vec<PassDesc> = descs.into_iter().collect();
        let mut index = HashMap::with_capacity(descs.len());

        // First pass: assign ids so that forward references resolve.
        for (id, desc) in descs.iter().enumerate() {
            if index.insert(desc.name.clone(), id).is_some() {
                return Err(SyncdagError::DuplicateName(desc.name.clone()));
            }
            if desc.queue >= queue_count {
                return Err(SyncdagError::QueueOutOfRange {
                    pass: desc.name.clone(),
                    queue: desc.queue,
                    queue_count,
                });
            }
        }

        let mut passes = Vec::with_capacity(descs.len());
        for desc in descs {
            let deps = desc
                .deps
                .iter()
                .map(|dep| {
                    index
                        .get(dep)
                        .copied()
                        .ok_or_else(|| SyncdagError::UnknownDependency {
                            pass: desc.name.clone(),
                            dependency: dep.clone(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            passes.push(Pass {
                name: desc.name,
                queue: desc.queue,
                deps,
            });
        }

        debug!(passes = passes.len(), queue_count, "registered pass graph");

        Ok(Self {
            passes,
            index,
            queue_count,
        })
    }

    /// Build a graph from a validated [`ConfigFile`].
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        Self::new(cfg.pass.iter().map(PassDesc::from), cfg.config.queue_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_forward_references() {
        let graph = PassGraph::new(
            vec![PassDesc::new("B", 0, &["A"]), PassDesc::new("A", 1, &[])],
            2,
        )
        .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.dependencies_of("B"), vec!["A"]);
        assert_eq!(graph.pass(0).deps, vec![1]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 0)]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = PassGraph::new(
            vec![PassDesc::new("A", 0, &[]), PassDesc::new("A", 1, &[])],
            2,
        )
        .unwrap_err();
        assert!(matches!(err, SyncdagError::DuplicateName(ref n) if n == "A"));
    }

    #[test]
    fn rejects_unknown_dependency() {
        let err = PassGraph::new(vec![PassDesc::new("A", 0, &["Missing"])], 1).unwrap_err();
        match err {
            SyncdagError::UnknownDependency { pass, dependency } => {
                assert_eq!(pass, "A");
                assert_eq!(dependency, "Missing");
            }
            other => panic!("expected UnknownDependency, got {other:?}"),
        }
    }

    #[test]
    fn rejects_queue_out_of_range() {
        let err = PassGraph::new(vec![PassDesc::new("A", 2, &[])], 2).unwrap_err();
        assert!(matches!(
            err,
            SyncdagError::QueueOutOfRange { queue: 2, queue_count: 2, .. }
        ));
    }

    #[test]
    fn rejects_zero_queues() {
        let err = PassGraph::new(Vec::new(), 0).unwrap_err();
        assert!(matches!(err, SyncdagError::InvalidQueueCount));
    }

    #[test]
    fn self_dependency_is_left_to_topology() {
        let graph = PassGraph::new(vec![PassDesc::new("A", 0, &["A"])], 1).unwrap();
        assert_eq!(graph.pass(0).deps, vec![0]);
    }
}

// src/dag/progress.rs

//! Per-queue progress vectors ("SSIS").
//!
//! Each queue is modelled as an independent logical clock. Component `q` of a
//! pass's vector is the sequence number queue `q` must have reached before
//! the pass may run:
//!
//! - a dependency on the pass's own queue costs one tick (`dep[q] + 1`);
//! - any other queue just inherits the dependency's wait point (`dep[q]`).

use std::fmt;
use std::ops::Index;

use crate::dag::graph::PassGraph;
use crate::types::{PassId, QueueIndex};

/// Fixed-length vector with one signal index per queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressVector(Box<[u32]>);

impl ProgressVector {
    pub fn zeroed(queue_count: usize) -> Self {
        Self(vec![0; queue_count].into_boxed_slice())
    }

    pub fn queue_count(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, queue: QueueIndex) -> u32 {
        self.0[queue]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Raise component `queue` to at least `value`.
    fn raise(&mut self, queue: QueueIndex, value: u32) {
        let slot = &mut self.0[queue];
        *slot = (*slot).max(value);
    }
}

impl Index<QueueIndex> for ProgressVector {
    type Output = u32;

    fn index(&self, queue: QueueIndex) -> &u32 {
        &self.0[queue]
    }
}

impl From<Vec<u32>> for ProgressVector {
    fn from(values: Vec<u32>) -> Self {
        Self(values.into_boxed_slice())
    }
}

impl fmt::Display for ProgressVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Compute the progress vector of every pass, indexed by [`PassId`].
///
/// `order` must be a topological order of `graph`.
pub fn compute_progress_vectors(graph: &PassGraph, order: &[PassId]) -> Vec<ProgressVector> {
    let queue_count = graph.queue_count();
    let mut vectors = vec![ProgressVector::zeroed(queue_count); graph.len()];

    for &id in order {
        let pass = graph.pass(id);
        let mut vector = ProgressVector::zeroed(queue_count);

        for &dep in &pass.deps {
            let dep_vector = &vectors[dep];
            for q in 0..queue_count {
                if q == pass.queue {
                    vector.raise(q, dep_vector[q] + 1);
                } else {
                    vector.raise(q, dep_vector[q]);
                }
            }
        }

        vectors[id] = vector;
    }

    vectors
}

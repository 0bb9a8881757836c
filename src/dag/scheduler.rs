// src/dag/scheduler.rs

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::model::ConfigFile;
use crate::dag::graph::PassGraph;
use crate::dag::levels::compute_levels;
use crate::dag::progress::{ProgressVector, compute_progress_vectors};
use crate::dag::sync::select_syncs;
use crate::dag::topology::topological_order;
use crate::errors::Result;
use crate::types::{PassName, QueueIndex};

/// Scheduler holds the immutable pass graph and derives schedules from it.
///
/// Planning runs the stages in their fixed order:
/// - topological sort (fails on cycles)
/// - levels
/// - progress vectors
/// - sync selection, per pass, in execution order
///
/// Every call to [`Scheduler::plan`] recomputes everything from the graph, so
/// planning twice yields identical schedules.
#[derive(Debug, Clone)]
pub struct Scheduler {
    graph: PassGraph,
}

/// Everything the scheduler derived for a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassPlan {
    pub name: PassName,
    pub queue: QueueIndex,
    pub level: u32,
    pub progress: ProgressVector,
    /// Direct dependencies to explicitly synchronize with.
    pub syncs: Vec<PassName>,
    /// Required queues that no direct dependency covered. Empty when the
    /// recommended syncs are sufficient.
    pub uncovered_queues: Vec<QueueIndex>,
}

/// Result of planning a pass graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    queue_count: usize,
    topological: Vec<PassName>,
    /// Plans in execution order.
    plans: Vec<PassPlan>,
    by_name: BTreeMap<PassName, usize>,
}

impl Scheduler {
    pub fn new(graph: PassGraph) -> Self {
        Self { graph }
    }

    /// Construct a scheduler from a validated [`ConfigFile`].
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        Ok(Self::new(PassGraph::from_config(cfg)?))
    }

    pub fn graph(&self) -> &PassGraph {
        &self.graph
    }

    /// Order the passes and compute sync recommendations.
    pub fn plan(&self) -> Result<Schedule> {
        let graph = &self.graph;

        let topo = topological_order(graph)?;
        let levels = compute_levels(graph, &topo);
        let vectors = compute_progress_vectors(graph, &topo);

        // Stable sort keeps topological order inside each (level, queue) bucket.
        let mut execution = topo.clone();
        execution.sort_by_key(|&id| (levels[id], graph.pass(id).queue));

        let mut plans = Vec::with_capacity(execution.len());
        for &id in &execution {
            let pass = graph.pass(id);
            let selection = select_syncs(graph, &vectors, id);

            if !selection.is_complete() {
                warn!(
                    pass = %pass.name,
                    uncovered = ?selection.uncovered,
                    "no direct dependency covers every required queue; syncs are incomplete"
                );
            }

            let syncs: Vec<PassName> = selection
                .syncs
                .iter()
                .map(|&dep| graph.name_of(dep).to_string())
                .collect();

            debug!(
                pass = %pass.name,
                queue = pass.queue,
                level = levels[id],
                progress = %vectors[id],
                ?syncs,
                "planned pass"
            );

            plans.push(PassPlan {
                name: pass.name.clone(),
                queue: pass.queue,
                level: levels[id],
                progress: vectors[id].clone(),
                syncs,
                uncovered_queues: selection.uncovered,
            });
        }

        let by_name = plans
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();

        let schedule = Schedule {
            queue_count: graph.queue_count(),
            topological: topo
                .iter()
                .map(|&id| graph.name_of(id).to_string())
                .collect(),
            plans,
            by_name,
        };

        info!(
            passes = schedule.plans.len(),
            syncs = schedule.total_syncs(),
            "schedule computed"
        );

        Ok(schedule)
    }
}

impl Schedule {
    pub fn queue_count(&self) -> usize {
        self.queue_count
    }

    /// Raw Kahn order, before the (level, queue) refinement.
    pub fn topological_order(&self) -> &[PassName] {
        &self.topological
    }

    /// Pass names sorted by (level, queue).
    pub fn execution_order(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|p| p.name.as_str())
    }

    /// Per-pass plans in execution order.
    pub fn plans(&self) -> &[PassPlan] {
        &self.plans
    }

    pub fn get(&self, pass: &str) -> Option<&PassPlan> {
        self.by_name.get(pass).map(|&i| &self.plans[i])
    }

    pub fn level(&self, pass: &str) -> Option<u32> {
        self.get(pass).map(|p| p.level)
    }

    pub fn progress_vector(&self, pass: &str) -> Option<&ProgressVector> {
        self.get(pass).map(|p| &p.progress)
    }

    pub fn recommended_syncs(&self, pass: &str) -> Option<&[PassName]> {
        self.get(pass).map(|p| p.syncs.as_slice())
    }

    /// Map of every pass to its recommended syncs.
    pub fn sync_map(&self) -> BTreeMap<&str, &[PassName]> {
        self.plans
            .iter()
            .map(|p| (p.name.as_str(), p.syncs.as_slice()))
            .collect()
    }

    pub fn total_syncs(&self) -> usize {
        self.plans.iter().map(|p| p.syncs.len()).sum()
    }

    /// `true` if no pass was left with uncovered required queues.
    pub fn is_fully_synchronized(&self) -> bool {
        self.plans.iter().all(|p| p.uncovered_queues.is_empty())
    }
}

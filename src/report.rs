// src/report.rs

//! Plain-text rendering of configs and schedules for the CLI.

use std::fmt::Write as _;

use crate::config::model::{ConfigFile, ConfigSection};
use crate::dag::Schedule;

/// Human-readable plan: execution order, then recommended syncs.
pub fn render_schedule(section: &ConfigSection, schedule: &Schedule) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Execution Order:");
    for plan in schedule.plans() {
        let _ = writeln!(
            out,
            "{} ({}) level={} progress={}",
            plan.name,
            section.queue_label(plan.queue),
            plan.level,
            plan.progress
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Synchronizations:");
    for plan in schedule.plans() {
        if !plan.syncs.is_empty() {
            let _ = writeln!(out, "{} should sync with: {}", plan.name, plan.syncs.join(", "));
        }
        if !plan.uncovered_queues.is_empty() {
            let labels: Vec<String> = plan
                .uncovered_queues
                .iter()
                .map(|&q| section.queue_label(q))
                .collect();
            let _ = writeln!(
                out,
                "warning: {} has no covering sync for: {}",
                plan.name,
                labels.join(", ")
            );
        }
    }

    out
}

/// Dry-run output: queues and passes with their dependencies, no planning.
pub fn render_dry_run(cfg: &ConfigFile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "syncdag dry-run");
    let _ = writeln!(out, "  config.queue_count = {}", cfg.config.queue_count);
    for q in 0..cfg.config.queue_count {
        let _ = writeln!(out, "    [{q}] {}", cfg.queue_label(q));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "passes ({}):", cfg.pass.len());
    for pass in &cfg.pass {
        let _ = writeln!(out, "  - {}", pass.name);
        let _ = writeln!(out, "      queue: {}", cfg.queue_label(pass.queue));
        if !pass.after.is_empty() {
            let _ = writeln!(out, "      after: {:?}", pass.after);
        }
    }

    out
}

// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod render;
pub mod report;
pub mod types;

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::dag::Scheduler;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation
/// - scheduling
/// - the text report on stdout
/// - the optional DOT export
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = &args.config;
    let cfg = load_and_validate(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if args.dry_run {
        print!("{}", report::render_dry_run(&cfg));
        return Ok(());
    }

    let scheduler = Scheduler::from_config(&cfg)?;
    let schedule = scheduler.plan()?;

    print!("{}", report::render_schedule(&cfg.config, &schedule));

    if let Some(ref dot_path) = args.dot {
        let dot = render::to_dot(scheduler.graph(), Some(&schedule));
        fs::write(dot_path, dot)
            .with_context(|| format!("writing {}", dot_path.display()))?;
        info!(path = %dot_path.display(), "wrote DOT graph");
    }

    Ok(())
}

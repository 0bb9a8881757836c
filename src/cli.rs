// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `syncdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "syncdag",
    version,
    about = "Order multi-queue pass graphs and pick the minimal cross-queue synchronizations.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the pass graph config file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SYNCDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, list the passes, but don't compute a schedule.
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the pass graph as Graphviz DOT to this path.
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

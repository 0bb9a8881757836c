// tests/cli_run.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use syncdag::cli::CliArgs;
use syncdag::run;
use syncdag_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn demo_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos/render-graph.toml")
        .display()
        .to_string()
}

#[test]
fn run_writes_dot_file() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let dot_path = dir.path().join("frame.dot");
    let config = demo_path();
    let dot_arg = dot_path.display().to_string();

    let args = CliArgs::try_parse_from([
        "syncdag",
        "--config",
        config.as_str(),
        "--dot",
        dot_arg.as_str(),
    ])?;
    run(args)?;

    let dot = fs::read_to_string(&dot_path)?;
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("FinalBlit (Q0)"));
    assert_eq!(dot.matches("\"sync\"").count(), 7);
    Ok(())
}

#[test]
fn dry_run_does_not_write_dot() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let dot_path = dir.path().join("frame.dot");
    let config = demo_path();
    let dot_arg = dot_path.display().to_string();

    let args = CliArgs::try_parse_from([
        "syncdag", "--config", config.as_str(), "--dot", dot_arg.as_str(), "--dry-run",
    ])?;
    run(args)?;

    assert!(!dot_path.exists());
    Ok(())
}

#[test]
fn run_surfaces_config_errors() {
    init_tracing();

    let args = CliArgs::try_parse_from(["syncdag", "--config", "/no/such/Passes.toml"]).unwrap();
    let err = run(args).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/Passes.toml"));
}

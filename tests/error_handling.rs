// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use syncdag::config::load_and_validate;
use syncdag::errors::SyncdagError;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_cycle_returns_structured_error() {
    let file = config_file(
        r#"
[config]
queue_count = 2

[[pass]]
name = "A"
queue = 0
after = ["B"]

[[pass]]
name = "B"
queue = 1
after = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(SyncdagError::Cycle { unresolved }) => {
            assert_eq!(unresolved, vec!["A", "B"]);
        }
        Err(e) => panic!("Expected Cycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dependency_is_reported_by_name() {
    let file = config_file(
        r#"
[[pass]]
name = "A"
after = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(SyncdagError::UnknownDependency { pass, dependency }) => {
            assert_eq!(pass, "A");
            assert_eq!(dependency, "NonExistent");
        }
        Err(e) => panic!("Expected UnknownDependency, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_name_is_rejected() {
    let file = config_file(
        r#"
[[pass]]
name = "A"

[[pass]]
name = "A"
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, SyncdagError::DuplicateName(ref n) if n == "A"));
    assert_eq!(err.to_string(), "Duplicate pass name: A");
}

#[test]
fn test_queue_out_of_range_is_rejected() {
    let file = config_file(
        r#"
[config]
queue_count = 2

[[pass]]
name = "Copy"
queue = 2
"#,
    );

    match load_and_validate(file.path()) {
        Err(SyncdagError::QueueOutOfRange {
            pass,
            queue,
            queue_count,
        }) => {
            assert_eq!(pass, "Copy");
            assert_eq!(queue, 2);
            assert_eq!(queue_count, 2);
        }
        other => panic!("Expected QueueOutOfRange, got: {:?}", other),
    }
}

#[test]
fn test_malformed_toml_is_a_toml_error() {
    let file = config_file("[[pass]]\nname = \n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(SyncdagError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    assert!(matches!(
        load_and_validate("/definitely/not/here/Passes.toml"),
        Err(SyncdagError::IoError(_))
    ));
}

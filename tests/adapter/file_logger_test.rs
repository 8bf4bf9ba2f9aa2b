//! File logger tests

use std::fs;

use chrono::NaiveDateTime;
use duet::Error;
use duet::adapters::{FileLogger, TIMESTAMP_FORMAT};
use duet::core::ports::Logger;
use duet::core::services::Calculator;
use tempfile::TempDir;

#[test]
fn test_log_creates_file_and_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.log");
    let mut logger = FileLogger::new(&path);

    let first = logger.log("first").unwrap();
    logger.log("second").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], first);
    assert!(lines[1].ends_with(": second"));
}

#[test]
fn test_entry_starts_with_timestamp() {
    let dir = TempDir::new().unwrap();
    let mut logger = FileLogger::new(dir.path().join("app.log"));

    let entry = logger.log("hello").unwrap();
    let (timestamp, message) = entry.split_once(": ").unwrap();

    assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(message, "hello");
}

#[test]
fn test_existing_content_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.log");
    fs::write(&path, "earlier\n").unwrap();

    FileLogger::new(&path).log("later").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("earlier\n"));
    assert!(content.trim_end().ends_with(": later"));
}

#[test]
fn test_unwritable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("app.log");

    let err = FileLogger::new(&path).log("lost").unwrap_err();
    assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
}

#[test]
fn test_calculator_with_file_logger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.log");
    let mut calc = Calculator::new(FileLogger::new(&path));

    assert_eq!(calc.add(5, 3).unwrap(), 8);
    assert_eq!(calc.subtract(10, 4).unwrap(), 6);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Addition: 5 + 3 = 8"));
    assert!(content.contains("Subtraction: 10 - 4 = 6"));
}

#[test]
fn test_calculator_propagates_log_failure() {
    let dir = TempDir::new().unwrap();
    let mut calc = Calculator::new(FileLogger::new(dir.path()));

    assert!(calc.add(1, 1).is_err());
}

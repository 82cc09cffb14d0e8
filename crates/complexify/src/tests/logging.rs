//! Log file setup and rollover tests.

use std::fs;

use crate::logging::{init_logging, roll_log_if_needed};

#[test]
fn test_roll_keeps_small_logs_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("complexify.log");
    fs::write(&log_path, "short").unwrap();

    roll_log_if_needed(&log_path, 1024).unwrap();

    assert!(log_path.exists());
    assert!(!dir.path().join("complexify.log.1").exists());
}

#[test]
fn test_roll_moves_oversized_log_aside() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("complexify.log");
    fs::write(&log_path, vec![b'x'; 64]).unwrap();

    roll_log_if_needed(&log_path, 16).unwrap();

    assert!(!log_path.exists());
    let rolled = dir.path().join("complexify.log.1");
    assert_eq!(fs::metadata(&rolled).unwrap().len(), 64);
}

#[test]
fn test_init_logging_writes_to_data_dir() {
    // Sets the process-global subscriber; keep this the only test that does
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");

    init_logging(&data_dir, "debug").unwrap();
    tracing::info!("hello from the test");

    let log_path = data_dir.join("complexify.log");
    assert!(log_path.exists());
    assert!(fs::metadata(&log_path).unwrap().len() > 0);
}

//! Tests for installing the global tracing subscriber.
//!
//! Kept in its own test binary so no other test has installed a subscriber.

use std::io::Write;
use tictactoe_tui::{TuiConfig, logging};

#[test]
fn test_second_subscriber_install_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("tictactoe.log");
    let config_path = dir.path().join("tictactoe.toml");
    let mut file = std::fs::File::create(&config_path).expect("config file");
    writeln!(file, "log_file = {:?}", log_path.display().to_string()).expect("write config");
    let config = TuiConfig::from_file(&config_path).expect("config");

    logging::init_file_logging(&config).expect("first install succeeds");
    assert!(log_path.exists());

    let err = logging::init_stderr_logging(&config).expect_err("second install fails");
    assert!(err.to_string().contains("stderr logging"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn prompt_assist() -> Command {
    Command::cargo_bin("prompt-assist").expect("binary built")
}

#[test]
fn help_lists_flags() {
    prompt_assist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"))
        .stdout(predicate::str::contains("[PROMPT]"));
}

#[test]
fn version_prints_package_version() {
    prompt_assist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_file_fails_before_tui() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    prompt_assist()
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_file_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[autocomplete]\ndebounce_ms = \"soon\"\n").expect("write config");

    prompt_assist()
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn non_http_server_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "").expect("write config");

    prompt_assist()
        .arg("-c")
        .arg(&path)
        .arg("--server")
        .arg("ftp://images.local")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL"));
}

#[test]
fn unwritable_log_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    let log = dir.path().join("no-such-dir").join("app.log");

    prompt_assist()
        .arg("--log-file")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logging"));
}

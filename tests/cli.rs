use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn airmouse_cmd() -> Command {
    Command::cargo_bin("airmouse").expect("binary exists")
}

fn write_trace(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const NEUTRAL_TRACE: &str = concat!(
    r#"{"t": 0.0, "hand": {"index": [0.46875, 0.5], "thumb": [0.625, 0.625], "middle": [0.390625, 0.25], "ring": [0.78125, 0.875]}}"#,
    "\n",
    r#"{"t": 0.033, "hand": null}"#,
    "\n",
);

#[test]
fn airmouse_help_prints_about() {
    airmouse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hand-gesture mouse control from a webcam landmark feed",
        ));
}

#[test]
fn bare_invocation_prints_usage() {
    let temp = TempDir::new().unwrap();
    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("airmouse --replay <TRACE>"));
}

#[test]
fn replay_of_missing_trace_fails_with_context() {
    let temp = TempDir::new().unwrap();
    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", "/nonexistent/trace.jsonl", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open landmark trace"));
}

#[test]
fn dry_run_replay_processes_trace() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(&temp, "trace.jsonl", NEUTRAL_TRACE);

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("RUST_LOG", "info")
        .args(["--replay", trace.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("session ended after 2 frames"));
}

#[test]
fn dry_run_accepts_screen_override() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(&temp, "trace.jsonl", NEUTRAL_TRACE);

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("RUST_LOG", "info")
        .args([
            "--replay",
            trace.to_str().unwrap(),
            "--dry-run",
            "--screen",
            "2560x1440",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("2560x1440 screen"));
}

#[test]
fn invalid_screen_spec_is_rejected() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(&temp, "trace.jsonl", NEUTRAL_TRACE);

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args([
            "--replay",
            trace.to_str().unwrap(),
            "--dry-run",
            "--screen",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid screen size"));
}

#[test]
fn malformed_trace_is_fatal() {
    let temp = TempDir::new().unwrap();
    let trace = write_trace(&temp, "trace.jsonl", "this is not json\n");

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--replay", trace.to_str().unwrap(), "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed trace record at line 1"));
}

#[test]
fn init_config_creates_file_once() {
    let temp = TempDir::new().unwrap();

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    assert!(temp.path().join("airmouse/config.toml").exists());

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_values_are_clamped_not_fatal() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("airmouse");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[gesture]\nclick_cooldown_ms = 5\n",
    )
    .unwrap();
    let trace = write_trace(&temp, "trace.jsonl", NEUTRAL_TRACE);

    airmouse_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .env("RUST_LOG", "warn")
        .args(["--replay", trace.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid click_cooldown_ms"));
}

//! Runs the built binary end to end in `--print` mode.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use std::process::{Command, Output};

fn profile_card_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_profile-card"));
    // Keep the developer's real config out of the run.
    let missing = std::env::temp_dir().join("profile-card-test-missing.toml");
    cmd.arg("--config").arg(missing);
    cmd
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[test]
fn test_help_lists_options() {
    let output = profile_card_cmd().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--print"));
}

#[tokio::test]
async fn test_print_renders_card() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"name":"Bob","email":"bob@x.com"}"#))
        .await;

    let mut cmd = profile_card_cmd();
    cmd.args(["--print", "--url", &backend.base_url()]);
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout.matches("Bob").count(), 1);
    assert_eq!(stdout.matches("bob@x.com").count(), 1);
    assert!(!stdout.contains("Loading"));
}

#[tokio::test]
async fn test_print_reports_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(404, "no such user"))
        .await;

    let mut cmd = profile_card_cmd();
    cmd.args(["--print", "--url", &backend.base_url()]);
    let output = run(cmd).await;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!output.status.success());
    assert!(stdout.contains("Failed to load profile"));
}

#[test]
fn test_invalid_path_is_rejected() {
    let output = profile_card_cmd()
        .args(["--print", "--path", "no-slash"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with '/'"));
}

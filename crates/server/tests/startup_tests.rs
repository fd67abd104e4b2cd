//! Startup tests for the `bonsai` binary.
//!
//! These run the built binary with a controlled environment and check that
//! it refuses to start, with a diagnostic and exit status 1, when it has no
//! usable search binding or configuration.

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns the binary with an empty environment and debug logging, so any
/// startup step past the failure point would show up on stdout.
fn bonsai() -> Command {
    let mut cmd = Command::cargo_bin("bonsai").expect("bonsai binary should be built");
    cmd.env_clear()
        .env("LOG_LEVEL", "debug")
        .env("HOST", "127.0.0.1")
        .env("PORT", "18080")
        .timeout(Duration::from_secs(30));
    cmd
}

/// Asserts nothing beyond configuration and discovery happened.
fn nothing_started() -> impl Predicate<str> {
    predicate::str::contains("Starting Bonsai")
        .or(predicate::str::contains("Server listening"))
        .or(predicate::str::contains("bootstrap"))
        .not()
}

#[test]
fn test_exits_when_no_search_service_is_bound() {
    bonsai()
        .env("VCAP_SERVICES", r#"{"redis": []}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            r#"not bound to elasticsearch or opensearch (found: ["redis"])"#,
        ))
        .stdout(nothing_started());
}

#[test]
fn test_exits_when_bindings_are_missing() {
    bonsai()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("VCAP_SERVICES is not set"))
        .stdout(nothing_started());
}

#[test]
fn test_exits_when_bindings_are_not_json() {
    bonsai()
        .env("VCAP_SERVICES", "elasticsearch")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid service bindings document"))
        .stdout(nothing_started());
}

#[test]
fn test_exits_on_invalid_configuration() {
    bonsai()
        .env("PORT", "0")
        .env(
            "VCAP_SERVICES",
            r#"{"elasticsearch": [{"credentials": {"uri": "http://127.0.0.1:1"}}]}"#,
        )
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Port cannot be 0"))
        .stdout(nothing_started());
}

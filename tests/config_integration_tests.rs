//! Integration tests for `init` and `config`.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// init
// =============================================================================

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".inkstreak.toml")).unwrap();
    assert!(content.contains("[stats]"));
    assert!(content.contains("extensions"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    fixture
        .cmd()
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_then_validate() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    fixture.cmd().args(["init", "--force"]).assert().success();

    fixture
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

// =============================================================================
// config validate
// =============================================================================

#[test]
fn validate_reports_semantic_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[stats]\nrecent_points = 0\n");

    fixture
        .cmd()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("recent_points"));
}

#[test]
fn validate_reports_parse_error_with_hint() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.toml", "[stats\n");

    fixture
        .cmd()
        .args(["config", "validate", "--config", "broken.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn validate_missing_file() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// config show
// =============================================================================

#[test]
fn show_defaults_without_config() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("recent_points = 14"));
}

#[test]
fn show_json_reflects_project_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[stats]\nduplicates = \"last\"\n");

    let output = fixture
        .cmd()
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["stats"]["duplicates"], "last");
    assert_eq!(json["counter"]["extensions"][0], "md");
}

#[test]
fn no_config_ignores_project_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[stats]\nrecent_points = 3\n");

    fixture
        .cmd()
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent_points = 14"));
}

#[test]
fn invalid_project_config_fails_every_command() {
    let fixture = TestFixture::new();
    fixture.create_config("version = \"7\"\n");

    fixture
        .cmd()
        .args(["streak"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported config version"));
}

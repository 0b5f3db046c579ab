//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, and `top --json` to check
//! that those values reach the ranking.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "RUST_LOG",
    "WORDRANK_LOG_LEVEL",
    "WORDRANK_LOG_DIR",
    "WORDRANK_LOG_PATH",
    "WORDRANK_TOP",
    "WORDRANK_EXCLUSIONS",
    "WORDRANK_DECODE",
];

/// Returns a Command configured to run our binary with a clean environment.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn run_json(mut command: Command) -> Value {
    let output = command.output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let mut command = cmd();
    command.args(["-C", dir.to_str().unwrap(), "info", "--json"]);
    run_json(command)
}

/// Run `top --json doc.txt` from a directory and parse the JSON output.
fn top_json(dir: &Path) -> Value {
    let mut command = cmd();
    command.args(["-C", dir.to_str().unwrap(), "top", "doc.txt", "--json"]);
    run_json(command)
}

fn words(report: &Value) -> Vec<String> {
    report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["word"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["top"], 50);
    assert_eq!(json["config"]["decode"], "ignore");
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
    assert!(
        json["config"]["exclusions"]
            .as_str()
            .unwrap()
            .ends_with("words-to-avoid.txt")
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 5").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["top"], 5);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".wordrank.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("wordrank.toml"), r#"decode = "ignore""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["decode"], "ignore");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 3").unwrap();
    fs::write(tmp.path().join("wordrank.toml"), "top = 9").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["top"], 9, "regular file should override dotfile");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(parent.join(".wordrank.toml"), "top = 2").unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["top"], 50, "boundary stops search");
    assert!(json["config"]["config_file"].is_null());
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.yaml"), "top: 4\ndecode: strict\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["top"], 4);
    assert_eq!(json["config"]["decode"], "strict");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordrank.json"),
        r#"{"log_level": "error", "max_input_bytes": 1024}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(json["config"]["max_input_bytes"], 1024);
}

#[test]
fn disable_input_limit_hides_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "disable_input_limit = true").unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 1").unwrap();
    fs::write(tmp.path().join(".wordrank.yaml"), "top: 2\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["top"], 2, "YAML merges after TOML");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 3").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "top = 12").unwrap();

    let mut command = cmd();
    command.args([
        "-C",
        tmp.path().to_str().unwrap(),
        "--config",
        explicit.to_str().unwrap(),
        "info",
        "--json",
    ]);
    let json = run_json(command);

    assert_eq!(json["config"]["top"], 12);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 3").unwrap();

    let mut command = cmd();
    command
        .env("WORDRANK_TOP", "7")
        .env("WORDRANK_DECODE", "ignore")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"]);
    let json = run_json(command);

    assert_eq!(json["config"]["top"], 7);
    assert_eq!(json["config"]["decode"], "ignore");
}

// =============================================================================
// Config Reaches Ranking
// =============================================================================

#[test]
fn configured_top_limits_report() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), "top = 1").unwrap();
    fs::write(tmp.path().join("words-to-avoid.txt"), "").unwrap();
    fs::write(tmp.path().join("doc.txt"), "cat cat dog").unwrap();

    let report = top_json(tmp.path());

    assert_eq!(report["top_k"], 1);
    assert_eq!(words(&report), ["cat"]);
}

#[test]
fn relative_exclusions_resolve_against_config_file() {
    let tmp = TempDir::new().unwrap();
    let work = tmp.path().join("work");
    fs::create_dir_all(tmp.path().join("lists")).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::write(tmp.path().join("lists").join("stop.txt"), "the, cat").unwrap();
    fs::write(
        tmp.path().join(".wordrank.toml"),
        r#"exclusions = "lists/stop.txt""#,
    )
    .unwrap();
    fs::write(work.join("doc.txt"), "The cat and the dog").unwrap();

    let report = top_json(&work);

    assert_eq!(words(&report), ["dog", "and"]);
}

#[test]
fn missing_configured_exclusions_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordrank.toml"),
        r#"exclusions = "nope.txt""#,
    )
    .unwrap();
    fs::write(tmp.path().join("doc.txt"), "cat").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "top", "doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordrank.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn invalid_decode_value_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordrank.toml"), r#"decode = "maybe""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordrank.toml"),
        "top = 6\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["top"], 6);
}

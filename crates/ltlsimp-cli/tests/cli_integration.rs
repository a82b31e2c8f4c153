//! Integration tests for ltlsimp-cli
//!
//! These tests verify end-to-end functionality of the CLI tool using assert_cmd.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Get the CLI binary command, isolated from any configuration file
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("ltlsimp").expect("Failed to find ltlsimp binary");
    cmd.env_remove("LTLSIMP_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Create a temporary test file
fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ltlsimp-test-{}-{}", std::process::id(), name));
    fs::write(&path, content).expect("Failed to write temp file");
    path
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simplify Linear Temporal Logic formulas"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ltlsimp"));
}

#[test]
fn test_simplify_quiet() {
    cli()
        .args(["G p0 & p0", "--quiet", "--no-config"])
        .assert()
        .success()
        .stdout("G p0\n");
}

#[test]
fn test_simplify_reports_summary() {
    cli()
        .args(["G ((r) | ((p) & (r)))", "--no-config", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simplification complete"))
        .stdout(predicate::str::contains("aggressively"))
        .stdout(predicate::str::ends_with("G r\n"));
}

#[test]
fn test_strategy_pullup_x() {
    cli()
        .args(["G (F (X b))", "--strategy", "pullup-x", "--quiet", "--no-config"])
        .assert()
        .success()
        .stdout("X G F b\n");
}

#[test]
fn test_strategy_propositional_keeps_temporal_structure() {
    cli()
        .args(["G p0 & p0 & true", "-s", "propositional", "-q", "--no-config"])
        .assert()
        .success()
        .stdout("p0 & G p0\n");
}

#[test]
fn test_invalid_strategy() {
    cli()
        .args(["a", "--strategy", "fastest", "--no-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown simplification strategy 'fastest'"));
}

#[test]
fn test_parse_error() {
    cli()
        .args(["a U", "--no-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse formula `a U`"))
        .stderr(predicate::str::contains("Unexpected end of input"));
}

#[test]
fn test_missing_formula() {
    cli()
        .arg("--no-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No formula given"));
}

#[test]
fn test_output_format_json() {
    let output = cli()
        .args(["F p0 | p0", "--output-format", "json", "--no-config"])
        .output()
        .expect("Failed to run ltlsimp");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["input"], "F p0 | p0");
    assert_eq!(json["output"], "F p0");
    assert_eq!(json["metrics"]["strategy"], "aggressively");
    assert_eq!(json["metrics"]["converged"], true);
    assert!(json.get("verified_on").is_none());
}

#[test]
fn test_output_format_stats() {
    cli()
        .args(["a & (b | (a & c))", "-F", "stats", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simplification Statistics:"))
        .stdout(predicate::str::contains("Passes:"))
        .stdout(predicate::str::contains("contextual_absorption: 1"));
}

#[test]
fn test_analyze_flag() {
    cli()
        .args(["G p0 & p0", "--analyze", "--quiet", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formula Metrics:"))
        .stdout(predicate::str::contains("Temporal depth"))
        .stdout(predicate::str::contains("globally"));
}

#[test]
fn test_verify_flag() {
    cli()
        .args(["!(a U !G b) & (x < 3 | x >= 3)", "--verify", "--no-config", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified on"))
        .stdout(predicate::str::ends_with("!a R G b\n"));
}

#[test]
fn test_max_passes_limit() {
    cli()
        .args(["!(a U !G b)", "--max-passes", "0", "--no-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_passes must be at least 1"));
}

#[test]
fn test_stdin_input() {
    cli()
        .args(["-", "--quiet", "--no-config"])
        .write_stdin("G p0 | p0\n")
        .assert()
        .success()
        .stdout("p0\n");
}

#[test]
fn test_file_output() {
    let path = std::env::temp_dir().join(format!("ltlsimp-test-{}-out.txt", std::process::id()));
    cli()
        .args(["true U F F b", "--quiet", "--no-config", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&path).expect("Output file should exist");
    assert_eq!(written, "F b\n");
    fs::remove_file(&path).ok();
}

#[test]
fn test_config_file_sets_strategy() {
    let config = temp_file("strategy.toml", "strategy = \"propositional\"\n");
    cli()
        .env("LTLSIMP_CONFIG", &config)
        .args(["G p0 & p0", "--quiet"])
        .assert()
        .success()
        .stdout("p0 & G p0\n");

    // command line wins over the file
    cli()
        .env("LTLSIMP_CONFIG", &config)
        .args(["G p0 & p0", "--quiet", "--strategy", "aggressively"])
        .assert()
        .success()
        .stdout("G p0\n");
    fs::remove_file(&config).ok();
}

#[test]
fn test_broken_config_file() {
    let config = temp_file("broken.toml", "strategy = [\n");
    cli()
        .env("LTLSIMP_CONFIG", &config)
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
    fs::remove_file(&config).ok();
}

#[test]
fn test_config_show() {
    cli()
        .args(["config", "show", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy = \"aggressively\""))
        .stdout(predicate::str::contains("[batch]"));
}

#[test]
fn test_config_path() {
    let config = temp_file("path.toml", "");
    cli()
        .env("LTLSIMP_CONFIG", &config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path.toml"));
    fs::remove_file(&config).ok();
}

#[test]
fn test_batch_processing() {
    let input = temp_file(
        "batch.ltl",
        "# scenarios\nG p0 & p0\n\nF p0 | p0\nG (F (X b))\n",
    );
    cli()
        .args(["batch", "--no-config", "--no-progress", "--no-color"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2: G p0 & p0  =>  G p0"))
        .stdout(predicate::str::contains("4: F p0 | p0  =>  F p0"))
        .stdout(predicate::str::contains("Total: 3"));
    fs::remove_file(&input).ok();
}

#[test]
fn test_batch_reports_failures() {
    let input = temp_file("batch-bad.ltl", "G p0 & p0\na U\n(b\n");
    cli()
        .args(["batch", "--no-config", "--no-progress", "--no-color"])
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Line 2: a U"))
        .stdout(predicate::str::contains("Line 3: (b"))
        .stderr(predicate::str::contains("Failures: 2"))
        .stderr(predicate::str::contains("2 of 3 formulas failed"));
    fs::remove_file(&input).ok();
}

#[test]
fn test_batch_json() {
    let input = temp_file("batch-json.ltl", "G p0 | p0\n");
    let output = cli()
        .args(["batch", "--no-config", "-F", "json", "--strategy", "modal"])
        .arg(&input)
        .output()
        .expect("Failed to run ltlsimp");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json[0]["total"], 1);
    assert_eq!(json[0]["entries"][0]["output"], "p0 | G p0");
    assert_eq!(json[0]["entries"][0]["metrics"]["strategy"], "modal");
    fs::remove_file(&input).ok();
}

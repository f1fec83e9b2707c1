//! CLI integration tests
//!
//! These tests verify the command-line interface behavior, including:
//! - Command parsing and help output
//! - Environment variable configuration
//! - Output formatting
//! - Exit codes

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the abigrab binary
fn abigrab_bin() -> PathBuf {
    // In tests, the binary should be at target/debug/abigrab
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .to_path_buf();

    // If we're in deps/, go up one more level
    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join("abigrab")
}

/// Helper to create an artifact tree with one interface and some noise
fn create_artifact_tree(dir: &TempDir) -> PathBuf {
    let input = dir.path().join("input");
    fs::create_dir(&input).expect("Failed to create input dir");

    fs::write(
        input.join("IToken.json"),
        r#"{"abi":[{"type":"function","name":"transfer"}],"bytecode":"0x"}"#,
    )
    .expect("Failed to write IToken.json");

    fs::write(input.join("Token.json"), r#"{"abi":[]}"#).expect("Failed to write Token.json");

    fs::create_dir(input.join("mocks")).expect("Failed to create mocks dir");
    fs::write(input.join("mocks").join("IOracle.json"), r#"{"abi":[]}"#)
        .expect("Failed to write mock artifact");

    input
}

#[test]
fn test_cli_help() {
    let output = Command::new(abigrab_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abigrab"));
    assert!(stdout.contains("extract"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(abigrab_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("abigrab"));
}

#[test]
fn test_extract_help() {
    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg("--help")
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--output-dir"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_extract_writes_abi_files() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = create_artifact_tree(&dir);
    let out_dir = dir.path().join("abis");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    let written = fs::read_to_string(out_dir.join("IToken.json")).expect("No output file");
    assert_eq!(written, "[{\"type\":\"function\",\"name\":\"transfer\"}]\n");
    assert!(!out_dir.join("Token.json").exists());
    assert!(!out_dir.join("IOracle.json").exists());
}

#[test]
fn test_extract_json_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = create_artifact_tree(&dir);
    let out_dir = dir.path().join("abis");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout is not valid JSON");
    assert_eq!(summary["abis_written"], 1);
    assert_eq!(summary["written"][0], "IToken.json");
}

#[test]
fn test_extract_reads_env_configuration() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = create_artifact_tree(&dir);
    let out_dir = dir.path().join("abis");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .env("ABIGRAB_INPUT_DIR", &input)
        .env("ABIGRAB_OUTPUT_DIR", &out_dir)
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    assert!(out_dir.join("IToken.json").exists());
}

#[test]
fn test_cli_arguments_override_env() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = create_artifact_tree(&dir);
    let env_out = dir.path().join("env-abis");
    let arg_out = dir.path().join("arg-abis");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg(&input)
        .arg("--output-dir")
        .arg(&arg_out)
        .env("ABIGRAB_OUTPUT_DIR", &env_out)
        .output()
        .expect("Failed to execute abigrab");

    assert!(output.status.success());
    assert!(arg_out.join("IToken.json").exists());
    assert!(!env_out.exists());
}

#[test]
fn test_extract_fails_on_missing_input_dir() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg(dir.path().join("does-not-exist"))
        .arg("--output-dir")
        .arg(dir.path().join("abis"))
        .output()
        .expect("Failed to execute abigrab");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_extract_fails_on_missing_abi_field() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("input");
    fs::create_dir(&input).expect("Failed to create input dir");
    fs::write(input.join("IFoo.json"), r#"{"notabi":1}"#).expect("Failed to write artifact");

    let output = Command::new(abigrab_bin())
        .arg("extract")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("abis"))
        .output()
        .expect("Failed to execute abigrab");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = Command::new(abigrab_bin())
        .arg("frobnicate")
        .output()
        .expect("Failed to execute abigrab");

    assert!(!output.status.success());
}

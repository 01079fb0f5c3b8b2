//! End-to-end tests for the `sqf` binary.
//!
//! Every test points `SQF_CONFIG` at a temporary file so the user's own
//! configuration is never read.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

fn sqf(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sqf"));
    cmd.env("SQF_CONFIG", config)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn run(config: &Path, args: &[&str]) -> Output {
    sqf(config).args(args).output().expect("failed to run sqf")
}

fn run_with_stdin(config: &Path, args: &[&str], input: &str) -> Output {
    let mut child = sqf(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn sqf");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for sqf")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn missing_config(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn check_accepts_valid_expression() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &missing_config(&dir),
        &["check", "TITLE LIKE '123%' AND (WEIGHT > 5 OR POSTDATE = '01.12.2025 12:00')"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Valid"));
}

#[test]
fn check_rejects_invalid_expression_with_exit_code_1() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["check", "WEIGHT LIKE 10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: invalid filter:"));
}

#[test]
fn check_json_reports_error_code() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["--json", "check", "(WEIGHT > 5"]);
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(json["error"]["code"], "GRAMMAR_ERROR");
}

#[test]
fn check_json_success() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["--json", "check", "weight >= 3"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["expression"], "weight >= 3");
}

#[test]
fn translate_prints_sql() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &missing_config(&dir),
        &["translate", "TITLE LIKE '123%' AND POSTDATE = '01.12.2025 12:00'"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "ARTICLE.TITLE LIKE '123%' AND ARTICLE_POST_DATE = '2025-12-01 12:00:00'\n"
    );
}

#[test]
fn translate_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = run_with_stdin(&missing_config(&dir), &["sql"], "WEIGHT < 7\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "ARTICLE.WEIGHT < 7\n");
}

#[test]
fn translate_uses_config_and_flag_overrides() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "version = 1\n\n[columns]\nNAME = \"p.name\"\nWEIGHT = \"p.weight\"\n",
    )
    .unwrap();

    let output = run(
        &config,
        &[
            "--json",
            "translate",
            "NAME = 'bolt' AND WEIGHT > 2",
            "--column",
            "WEIGHT=w.grams",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["sql"], "p.name = 'bolt' AND w.grams > 2");
}

#[test]
fn translate_unknown_column_field_is_config_error() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &missing_config(&dir),
        &["--json", "translate", "WEIGHT > 2", "--column", "HEIGHT=h"],
    );
    assert_eq!(output.status.code(), Some(5));

    let json: Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(json["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn tokens_json_lists_classified_tokens() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["--json", "tokens", "name='a b'"]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["normalized"], "NAME = 'a b'");
    let tokens = json["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["kind"], "FIELD");
    assert_eq!(tokens[2]["text"], "'a b'");
}

#[test]
fn fields_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["fields"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for name in ["TITLE", "NAME", "WEIGHT", "POSTDATE"] {
        assert!(text.contains(name), "missing {name} in:\n{text}");
    }
}

#[test]
fn config_init_then_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("sub").join("config.toml");

    let output = run(&config, &["config", "init"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(config.exists());

    let output = run(&config, &["config", "init"]);
    assert_eq!(output.status.code(), Some(5));

    let output = run(&config, &["config", "path"]);
    assert_eq!(stdout(&output).trim(), config.display().to_string());
}

#[test]
fn broken_config_fails_translate() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[columns]\nTITLE = \"\"\n").unwrap();

    let output = run(&config, &["translate", "TITLE = 'x'"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn completions_generate_script() {
    let dir = TempDir::new().unwrap();
    let output = run(&missing_config(&dir), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("sqf"));
}

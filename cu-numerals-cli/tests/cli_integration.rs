//! Integration tests for the cunum CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn cunum() -> Command {
    let mut cmd = Command::cargo_bin("cunum").unwrap();
    cmd.env_remove("CUNUM_CONFIG");
    cmd
}

#[test]
fn test_format_values() {
    cunum()
        .args(["format", "1", "12", "1860"])
        .assert()
        .success()
        .stdout("а҃\nв҃і\n҂аѿѯ҃\n");
}

#[test]
fn test_format_negative_value() {
    cunum()
        .args(["format", "-1860"])
        .assert()
        .success()
        .stdout("-҂аѿѯ҃\n");
}

#[test]
fn test_format_old_dialect() {
    cunum()
        .args(["format", "--dialect", "old", "12345"])
        .assert()
        .success()
        .stdout("҂в҂ітм҃є\n");
}

#[test]
fn test_format_no_titlo_plain_spaces() {
    cunum()
        .args(["format", "--no-titlo", "--plain-spaces", "11100"])
        .assert()
        .success()
        .stdout("҂аі р\n");
}

#[test]
fn test_format_from_file() {
    cunum()
        .args(["format", "-i"])
        .arg(fixture_path("values.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("҂аѿѯ҃\n"))
        .stdout(predicate::str::contains("-є҃\n"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 5));
}

#[test]
fn test_format_from_stdin() {
    cunum()
        .arg("format")
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout("в҃\nг҃\n");
}

#[test]
fn test_format_invalid_value() {
    cunum()
        .args(["format", "-i"])
        .arg(fixture_path("bad-values.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not an integer: seven"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_parse_numerals() {
    cunum()
        .args(["parse", "-i"])
        .arg(fixture_path("numerals.txt"))
        .assert()
        .success()
        .stdout("1\n12\n1860\n");
}

#[test]
fn test_parse_negative_numeral() {
    cunum()
        .args(["parse", "--", "-в҃і"])
        .assert()
        .success()
        .stdout("-12\n");
}

#[test]
fn test_parse_invalid_numeral() {
    cunum()
        .args(["parse", "а ҂в"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid numeral"))
        .stderr(predicate::str::contains("not in descending order"));
}

#[test]
fn test_parse_json_output() {
    cunum()
        .args(["parse", "-f", "json", "в҃і"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input\": \"в҃і\""))
        .stdout(predicate::str::contains("\"output\": 12"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    cunum()
        .args(["format", "7", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "з҃\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("cunum.toml");
    fs::write(
        &config_path,
        "[format]\ndialect = \"old\"\nadd_titlo = false\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    cunum()
        .args(["format", "-c"])
        .arg(&config_path)
        .arg("12345")
        .assert()
        .success()
        .stdout("[{\"input\":\"12345\",\"output\":\"҂в҂ітмє\"}]\n");
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("cunum.toml");
    fs::write(&config_path, "[format]\nadd_titlo = false\n").unwrap();

    cunum()
        .env("CUNUM_CONFIG", &config_path)
        .args(["format", "1860"])
        .assert()
        .success()
        .stdout("҂аѿѯ\n");
}

#[test]
fn test_invalid_config_dialect() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("cunum.toml");
    fs::write(&config_path, "[format]\ndialect = \"modern\"\n").unwrap();

    cunum()
        .args(["format", "-c"])
        .arg(&config_path)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_input_pattern() {
    cunum()
        .args(["parse", "-i", "no-such-dir/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_list_dialects() {
    cunum()
        .args(["list", "dialects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("old"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("generated.toml");

    cunum()
        .args(["generate-config", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    cunum()
        .args(["format", "-c"])
        .arg(&config_path)
        .arg("1860")
        .assert()
        .success()
        .stdout("҂аѿѯ҃\n");
}

#[test]
fn test_help() {
    cunum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("parse"));
}

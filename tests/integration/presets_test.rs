//! Tests for the preset catalog and preset-seeded generation.

use assert_cmd::Command;
use predicates::prelude::*;

fn termstyle() -> Command {
    Command::cargo_bin("termstyle").unwrap()
}

#[test]
fn presets_lists_the_builtin_three() {
    termstyle()
        .arg("presets")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("success")
                .and(predicate::str::contains("error"))
                .and(predicate::str::contains("warning")),
        );
}

#[test]
fn presets_json_round_trips() {
    let output = termstyle().args(["presets", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|e| e["kind"] == "warning"));
}

#[test]
fn generate_seeds_from_a_preset() {
    termstyle()
        .args(["generate", "--preset", "success", "--format", "powershell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-ForegroundColor Green"));
}

#[test]
fn preset_fields_can_be_overridden_by_flags() {
    termstyle()
        .args(["generate", "--preset", "success", "--text", "done", "--format", "powershell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write-Host \"done\""));
}

#[test]
fn unknown_preset_is_an_error() {
    termstyle()
        .args(["generate", "--preset", "info", "--format", "ansi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'info'"));
}

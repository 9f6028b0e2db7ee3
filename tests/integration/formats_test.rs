//! Tests for the `formats` listing.

use assert_cmd::Command;
use predicates::prelude::*;

fn termstyle() -> Command {
    Command::cargo_bin("termstyle").unwrap()
}

#[test]
fn formats_lists_every_id() {
    let mut assert = termstyle().arg("formats").assert().success();
    for id in ["ansi", "bash", "python", "powershell", "preview", "rainbow", "gradient", "banner"] {
        assert = assert.stdout(predicate::str::contains(id));
    }
}

#[test]
fn formats_json_is_a_catalog_of_eight() {
    let output = termstyle().args(["formats", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 8);
    assert!(entries.iter().any(|e| e["id"] == "banner"));
}

#[test]
fn piped_listing_has_no_escape_codes() {
    // stdout is not a tty under assert_cmd, so the theme must stay plain
    termstyle()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

//! Tests for the `generate` subcommand across output formats.

use assert_cmd::Command;
use predicates::prelude::*;

fn termstyle() -> Command {
    Command::cargo_bin("termstyle").unwrap()
}

// ============================================================================
// ANSI Sequence Tests
// ============================================================================

#[test]
fn ansi_bold_red_emits_exact_sequence() {
    termstyle()
        .args(["generate", "--text", "hi", "--color", "red", "--bold", "--format", "ansi"])
        .assert()
        .success()
        .stdout("\u{1b}[1;31mhi\u{1b}[0m\n");
}

#[test]
fn ansi_unknown_color_is_silently_skipped() {
    termstyle()
        .args(["generate", "--text", "hi", "--color", "chartreuse", "--format", "ansi"])
        .assert()
        .success()
        .stdout("\u{1b}[mhi\u{1b}[0m\n");
}

#[test]
fn blank_text_prints_nothing() {
    termstyle()
        .args(["generate", "--text", "   ", "--format", "ansi"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// Shell Command Tests
// ============================================================================

#[test]
fn bash_renders_escape_bytes_as_literals() {
    termstyle()
        .args(["generate", "--text", "hi", "--color", "red", "--bold", "--format", "bash"])
        .assert()
        .success()
        .stdout("echo -e \"\\033[1;31mhi\\033[0m\"\n");
}

#[test]
fn python_mirrors_the_bash_escaping() {
    termstyle()
        .args(["generate", "--text", "hi", "--color", "red", "--format", "python"])
        .assert()
        .success()
        .stdout("print(\"\\033[31mhi\\033[0m\")\n");
}

#[test]
fn powershell_purple_uses_magenta() {
    termstyle()
        .args(["generate", "--text", "hi", "--color", "purple", "--format", "powershell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-ForegroundColor Magenta"));
}

// ============================================================================
// Decorative Format Tests
// ============================================================================

#[test]
fn rainbow_seventh_char_reuses_first_code() {
    termstyle()
        .args(["generate", "--text", "abcdefg", "--format", "rainbow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[31ma").and(predicate::str::contains("\u{1b}[31mg")));
}

#[test]
fn rainbow_markup_form_emits_spans() {
    termstyle()
        .args(["generate", "--text", "ab", "--format", "rainbow", "--markup"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<span style=\"color: #ff0000\">a</span>",
        ));
}

#[test]
fn gradient_single_char_uses_start_color() {
    termstyle()
        .args([
            "generate",
            "--text",
            "x",
            "--format",
            "gradient",
            "--gradient-start",
            "#ff0000",
            "--gradient-end",
            "#0000ff",
        ])
        .assert()
        .success()
        .stdout("\u{1b}[38;2;255;0;0mx\u{1b}[0m\n");
}

#[test]
fn gradient_rejects_malformed_hex() {
    termstyle()
        .args([
            "generate",
            "--text",
            "hi",
            "--format",
            "gradient",
            "--gradient-start",
            "#not-a-color",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid gradient start color"));
}

// ============================================================================
// Banner Tests
// ============================================================================

#[test]
fn banner_wrapped_in_bash_is_one_echo_line() {
    termstyle()
        .args(["generate", "--text", "Hi", "--format", "banner", "--wrap", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("echo -e \"").and(predicate::str::contains("\\n")));
}

#[test]
fn banner_unknown_font_falls_back_to_plain_text() {
    termstyle()
        .args(["generate", "--text", "Hi", "--format", "banner", "--font", "nosuchfont"])
        .assert()
        .success()
        .stdout("Hi\n");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn unknown_format_is_an_error() {
    termstyle()
        .args(["generate", "--text", "hi", "--format", "html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'html'"));
}

#[test]
fn unknown_wrap_target_is_an_error() {
    termstyle()
        .args(["generate", "--text", "hi", "--format", "banner", "--wrap", "zsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown wrap target"));
}

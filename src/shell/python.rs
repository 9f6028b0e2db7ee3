//! Python script command generation.
//!
//! Mirrors the bash generator but wraps the sequence in `print(...)`; the
//! same `\033` escaping rule applies because Python string literals resolve
//! the octal escape back to the escape byte.

use crate::render::ansi;
use crate::shell::{escape_banner_art, escape_bytes_to_literals};
use crate::style::StyleState;

/// Generate a `print` statement reproducing the styled text.
///
/// Returns an empty string for blank input.
pub fn print_command(state: &StyleState) -> String {
    if state.is_blank() {
        return String::new();
    }
    format!(
        "print(\"{}\")",
        escape_bytes_to_literals(&ansi::escape_sequence(state))
    )
}

/// Wrap rendered banner art in a `print` statement, escaped the same way
/// as the bash form. Returns an empty string for blank art.
pub fn banner_command(art: &str) -> String {
    if art.trim().is_empty() {
        return String::new();
    }
    format!("print(\"{}\")", escape_banner_art(art))
}

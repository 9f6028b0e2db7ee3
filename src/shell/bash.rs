//! Bash/Unix shell command generation.
//!
//! Wraps the ANSI-encoded string in `echo -e "..."`, rendering every escape
//! byte as the literal `\033` since the sequence is embedded in source text
//! rather than executed in-process.

use crate::render::ansi;
use crate::shell::{escape_banner_art, escape_bytes_to_literals};
use crate::style::StyleState;

/// Generate an `echo -e` command reproducing the styled text.
///
/// Returns an empty string for blank input.
pub fn echo_command(state: &StyleState) -> String {
    if state.is_blank() {
        return String::new();
    }
    format!(
        "echo -e \"{}\"",
        escape_bytes_to_literals(&ansi::escape_sequence(state))
    )
}

/// Wrap rendered banner art in an `echo -e` command.
///
/// Backslashes are doubled, newlines become `\n` literals and double quotes
/// are escaped, so the multi-line art survives a double-quoted argument.
/// Returns an empty string for blank art.
pub fn banner_command(art: &str) -> String {
    if art.trim().is_empty() {
        return String::new();
    }
    format!("echo -e \"{}\"", escape_banner_art(art))
}

//! PowerShell command generation.
//!
//! Uses native console color flags instead of ANSI codes: the text goes to
//! `Write-Host` and the colors become `-ForegroundColor` / `-BackgroundColor`
//! arguments with the console palette names. A flag is omitted entirely when
//! its color is unset, transparent or unknown to the palette.

use crate::style::{palette, StyleState};

/// Generate a `Write-Host` command reproducing the styled text.
///
/// Returns an empty string for blank input. Bold/italic/underline have no
/// console equivalent and are not represented.
pub fn write_host_command(state: &StyleState) -> String {
    if state.is_blank() {
        return String::new();
    }

    let mut command = String::from("Write-Host");
    command.push_str(&format!(" \"{}\"", state.raw_text));

    if !state.text_color.is_empty() {
        if let Some(name) = palette::powershell_fg(&state.text_color) {
            command.push_str(&format!(" -ForegroundColor {}", name));
        }
    }

    if !state.background_color.is_empty() && state.background_color != "transparent" {
        if let Some(name) = palette::powershell_bg(&state.background_color) {
            command.push_str(&format!(" -BackgroundColor {}", name));
        }
    }

    command
}

/// Wrap rendered banner art in a literal here-string.
///
/// Here-strings keep real newlines, so the art needs no backslash escaping.
/// Returns an empty string for blank art.
pub fn banner_command(art: &str) -> String {
    if art.trim().is_empty() {
        return String::new();
    }
    format!("Write-Host @\"\n{}\n\"@", art.trim_end_matches('\n'))
}

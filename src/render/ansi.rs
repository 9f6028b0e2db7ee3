//! ANSI SGR escape-sequence encoding.
//!
//! Builds the escape sequence a real terminal would interpret: attribute
//! parameters first (bold 1, italic 3, underline 4), then the foreground
//! code, then the background code, semicolon-joined inside `ESC[...m` and
//! closed with the `ESC[0m` reset.

use crate::style::{palette, StyleState};

/// The escape-introducer prefix of every sequence.
pub const CSI: &str = "\x1b[";

/// The full reset sequence appended after the text.
pub const RESET: &str = "\x1b[0m";

/// Encode a styling state as a single ANSI-escaped string.
///
/// Returns an empty string for blank input. Unrecognized color names are
/// skipped; with nothing to encode the sequence degenerates to `ESC[m`,
/// which terminals treat as a no-op.
pub fn escape_sequence(state: &StyleState) -> String {
    if state.is_blank() {
        return String::new();
    }

    let mut codes: Vec<&str> = Vec::new();

    if state.styles.bold {
        codes.push("1");
    }
    if state.styles.italic {
        codes.push("3");
    }
    if state.styles.underline {
        codes.push("4");
    }

    if !state.text_color.is_empty() {
        if let Some(code) = palette::ansi_fg(&state.text_color) {
            codes.push(code);
        }
    }

    if !state.background_color.is_empty() && state.background_color != "transparent" {
        if let Some(code) = palette::ansi_bg(&state.background_color) {
            codes.push(code);
        }
    }

    format!("{}{}m{}{}", CSI, codes.join(";"), state.raw_text, RESET)
}

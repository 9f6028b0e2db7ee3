//! Inline markup for visual preview.
//!
//! Emits `<span style="...">` fragments the UI layer renders directly. The
//! rainbow and gradient forms deliberately skip the blank-input check the
//! shell generators carry: markup is visual, not an executable command.
//! Possibly an inconsistency, but callers rely on it, so it stays.

use crate::style::{palette, Rgb, StyleState};

/// Hex cycle for the rainbow preview: red, orange, yellow, green, blue,
/// indigo, violet.
const RAINBOW_HEX: [&str; 7] = [
    "#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#9400d3",
];

/// Render the whole state as a single styled span.
///
/// Known color names map to the preview palette; anything else is passed
/// through verbatim so direct CSS values keep working. Returns an empty
/// string for blank input.
pub fn styled_span(state: &StyleState) -> String {
    if state.is_blank() {
        return String::new();
    }

    let mut props: Vec<String> = Vec::new();

    if !state.text_color.is_empty() {
        let value = palette::preview_fg_hex(&state.text_color).unwrap_or(&state.text_color);
        props.push(format!("color: {}", value));
    }

    if !state.background_color.is_empty() && state.background_color != "transparent" {
        let value =
            palette::preview_bg_hex(&state.background_color).unwrap_or(&state.background_color);
        props.push(format!("background-color: {}", value));
    }

    if state.styles.bold {
        props.push("font-weight: bold".to_string());
    }
    if state.styles.italic {
        props.push("font-style: italic".to_string());
    }
    if state.styles.underline {
        props.push("text-decoration: underline".to_string());
    }

    format!(
        "<span style=\"{}\">{}</span>",
        props.join("; "),
        state.raw_text
    )
}

/// Wrap each character in a span colored by the 7-entry rainbow hex cycle.
///
/// Only looks at the text, never the state's chosen colors. No blank check.
pub fn rainbow_spans(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let color = RAINBOW_HEX[i % RAINBOW_HEX.len()];
            format!("<span style=\"color: {}\">{}</span>", color, c)
        })
        .collect()
}

/// Wrap each character in a span colored by linear interpolation between
/// `start` and `end`.
///
/// Ratio 0 applies when the text has a single character. No blank check.
pub fn gradient_spans(text: &str, start: Rgb, end: Rgb) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let ratio = if len <= 1 {
                0.0
            } else {
                i as f64 / (len - 1) as f64
            };
            format!(
                "<span style=\"color: {}\">{}</span>",
                start.lerp(end, ratio),
                c
            )
        })
        .collect()
}

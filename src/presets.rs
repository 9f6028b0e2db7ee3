//! Built-in preset messages.
//!
//! Convenience templates for common status lines. A preset has no lifecycle
//! of its own - applying one just copies its fields into a fresh
//! [`StyleState`], which the caller is then free to edit.

use serde::Serialize;

use crate::style::{StyleState, TextStyle};

/// Category of a preset message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Success,
    Error,
    Warning,
}

/// A named styling template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetMessage {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
    pub text_color: &'static str,
    pub background_color: &'static str,
    pub styles: TextStyle,
    pub kind: PresetKind,
}

impl PresetMessage {
    /// Copy this preset into a styling state.
    pub fn to_state(&self) -> StyleState {
        StyleState {
            raw_text: self.text.to_string(),
            text_color: self.text_color.to_string(),
            background_color: self.background_color.to_string(),
            styles: self.styles,
        }
    }
}

const BOLD: TextStyle = TextStyle {
    bold: true,
    italic: false,
    underline: false,
};

/// The built-in preset catalog.
pub const BUILTIN_PRESETS: &[PresetMessage] = &[
    PresetMessage {
        id: "success",
        name: "Success",
        text: "✓ Operation completed successfully",
        text_color: "green",
        background_color: "",
        styles: BOLD,
        kind: PresetKind::Success,
    },
    PresetMessage {
        id: "error",
        name: "Error",
        text: "✗ Error: operation failed",
        text_color: "red",
        background_color: "",
        styles: BOLD,
        kind: PresetKind::Error,
    },
    PresetMessage {
        id: "warning",
        name: "Warning",
        text: "⚠ Warning: check your input",
        text_color: "yellow",
        background_color: "",
        styles: BOLD,
        kind: PresetKind::Warning,
    },
];

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static PresetMessage> {
    BUILTIN_PRESETS.iter().find(|p| p.id == id)
}

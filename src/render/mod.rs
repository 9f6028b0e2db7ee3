//! Output rendering.
//!
//! Pure string-formatting functions over a [`crate::style::StyleState`]:
//! - [`ansi`] - SGR escape-sequence encoding
//! - [`effects`] - per-character rainbow and truecolor gradient sequences
//! - [`preview`] - inline HTML-span markup for visual preview

pub mod ansi;
pub mod effects;
pub mod preview;

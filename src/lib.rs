//! termstyle - terminal text styler.
//!
//! Converts a small styling state (raw text, foreground/background color,
//! bold/italic/underline flags) into several textual output representations:
//!
//! - raw ANSI SGR escape sequences ([`render::ansi`])
//! - shell command snippets for bash, PowerShell and Python ([`shell`])
//! - inline HTML-style markup for visual preview ([`render::preview`])
//! - decorative rainbow/gradient text ([`render::effects`])
//! - ASCII-art banners via a FIGlet renderer ([`banner`])
//!
//! Everything in the library is a pure function over value inputs; the only
//! stateful piece is the [`banner::FigletRenderer`], which loads its font
//! table once at construction. All generators degrade instead of failing:
//! unknown color names are skipped, blank input yields an empty string, and a
//! failed banner render falls back to the plain text.

pub mod banner;
pub mod cli;
pub mod config;
pub mod formats;
pub mod presets;
pub mod render;
pub mod shell;
pub mod style;
pub mod theme;
pub mod version;

// Re-export the types callers touch most
pub use config::Config;
pub use style::{Rgb, StyleState, TextStyle};

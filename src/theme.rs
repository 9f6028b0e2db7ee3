//! Theme for CLI listings.
//!
//! Colors the `formats`/`presets` tables when stdout is a terminal and
//! degrades to plain text when piped. These are fixed UI colors for the
//! tool's own output, separate from the user-facing styling palettes.

/// Reset sequence.
const RESET: &str = "\x1b[0m";

/// Bold cyan, for identifiers.
const ACCENT: &str = "\x1b[1;36m";

/// Bright black, for secondary text.
const DIM: &str = "\x1b[90m";

/// Bold, for headings.
const HEADING: &str = "\x1b[1m";

/// Minimal color theme for CLI output.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    /// Theme that colors only when stdout is a tty.
    pub fn auto() -> Self {
        Self {
            enabled: atty::is(atty::Stream::Stdout),
        }
    }

    /// Theme with colors forced on or off.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, prefix: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", prefix, text, RESET)
    }

    /// Emphasized identifier (format/preset ids).
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, ACCENT)
    }

    /// Secondary text (descriptions).
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, DIM)
    }

    /// Section heading.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, HEADING)
    }
}

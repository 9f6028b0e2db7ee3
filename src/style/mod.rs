//! Styling state types.
//!
//! Contains the value types every generator consumes:
//! - TextStyle: bold/italic/underline attribute flags
//! - StyleState: one complete styling request (text + colors + attributes)
//! - Rgb: a 24-bit color with hex parsing and linear interpolation
//!
//! Color fields hold caller-supplied names ("red", "darkGray", ...); lookup
//! against the fixed palettes happens in the generators, and names the
//! palettes do not know are skipped there rather than rejected here.

pub mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text attribute flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    /// True when no attribute is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

/// One complete styling request.
///
/// Owned by the caller and never mutated by the generators. An empty
/// `text_color` means "no foreground"; `background_color` additionally
/// treats the literal name `"transparent"` as "no background".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleState {
    pub raw_text: String,
    pub text_color: String,
    pub background_color: String,
    pub styles: TextStyle,
}

impl StyleState {
    /// Convenience constructor for plain text with no colors or attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            raw_text: text.into(),
            ..Self::default()
        }
    }

    /// True when the raw text is empty or whitespace-only.
    ///
    /// Every shell/sequence generator returns an empty string for blank
    /// input; no escape codes or commands are emitted for it.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    BadLength(usize),

    #[error("invalid hex digit in '{0}'")]
    BadDigit(String),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`.
    ///
    /// Each channel is interpolated independently, rounded, and clamped to
    /// the byte range. A ratio of 0.0 returns `self`, 1.0 returns `other`.
    pub fn lerp(self, other: Rgb, ratio: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    /// Two lowercase hex digits per channel, `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ParseColorError::BadLength(hex.len()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::BadDigit(s.to_string()))
        };
        Ok(Rgb {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

//! ASCII-art banner rendering.
//!
//! Glyph rendering is delegated to an external FIGlet implementation behind
//! the narrow [`GlyphRenderer`] trait, so the renderer can be swapped or
//! stubbed in tests. [`FigletRenderer`] loads the embedded Standard font
//! eagerly at construction; further fonts can be registered from `.flf`
//! files. Render failures never reach the caller: [`render_banner`] logs
//! them and returns the plain input text as the degraded result.

use std::collections::HashMap;
use std::path::Path;

use figlet_rs::FIGfont;
use tracing::warn;

/// Name of the font every renderer must have pre-registered.
pub const DEFAULT_FONT: &str = "standard";

/// Errors from glyph rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unknown font '{name}'")]
    UnknownFont { name: String },

    #[error("font failed to load: {0}")]
    FontLoad(String),

    #[error("glyph rendering failed for font '{font}'")]
    Glyph { font: String },
}

/// A component that turns plain text into multi-line block-letter art.
pub trait GlyphRenderer {
    /// Render `text` with the named font.
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError>;
}

/// FIGlet-backed glyph renderer.
///
/// Font lookup is case-insensitive; the embedded Standard font is always
/// available.
pub struct FigletRenderer {
    fonts: HashMap<String, FIGfont>,
}

impl FigletRenderer {
    /// Create a renderer with the embedded Standard font loaded.
    pub fn new() -> Result<Self, RenderError> {
        let standard = FIGfont::standard().map_err(RenderError::FontLoad)?;
        let mut fonts = HashMap::new();
        fonts.insert(DEFAULT_FONT.to_string(), standard);
        Ok(Self { fonts })
    }

    /// Register an additional font from a `.flf` file under the given name.
    pub fn register_font_file(&mut self, name: &str, path: &Path) -> Result<(), RenderError> {
        let font = FIGfont::from_file(&path.to_string_lossy()).map_err(RenderError::FontLoad)?;
        self.fonts.insert(name.to_ascii_lowercase(), font);
        Ok(())
    }

    /// Names of all registered fonts.
    pub fn font_names(&self) -> Vec<&str> {
        self.fonts.keys().map(String::as_str).collect()
    }
}

impl GlyphRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str) -> Result<String, RenderError> {
        let fig = self
            .fonts
            .get(&font.to_ascii_lowercase())
            .ok_or_else(|| RenderError::UnknownFont {
                name: font.to_string(),
            })?;
        let figure = fig.convert(text).ok_or_else(|| RenderError::Glyph {
            font: font.to_string(),
        })?;
        Ok(figure.to_string())
    }
}

/// Render banner art, falling back to the plain text on any failure.
///
/// The error is logged, never propagated; the caller always gets some
/// string back.
pub fn render_banner(renderer: &dyn GlyphRenderer, text: &str, font: &str) -> String {
    match renderer.render(text, font) {
        Ok(art) => art,
        Err(err) => {
            warn!(%err, font, "banner rendering failed, falling back to plain text");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub renderer that always fails.
    struct FailingRenderer;

    impl GlyphRenderer for FailingRenderer {
        fn render(&self, _text: &str, font: &str) -> Result<String, RenderError> {
            Err(RenderError::Glyph {
                font: font.to_string(),
            })
        }
    }

    /// Stub renderer that surrounds the text with markers.
    struct MarkerRenderer;

    impl GlyphRenderer for MarkerRenderer {
        fn render(&self, text: &str, _font: &str) -> Result<String, RenderError> {
            Ok(format!("<<{}>>", text))
        }
    }

    #[test]
    fn failure_falls_back_to_input_text() {
        assert_eq!(render_banner(&FailingRenderer, "hello", "standard"), "hello");
    }

    #[test]
    fn success_returns_rendered_art() {
        assert_eq!(render_banner(&MarkerRenderer, "hi", "standard"), "<<hi>>");
    }

    #[test]
    fn figlet_renderer_knows_the_standard_font() {
        let renderer = FigletRenderer::new().unwrap();
        assert!(renderer.font_names().contains(&DEFAULT_FONT));
    }

    #[test]
    fn figlet_renders_multiline_art() {
        let renderer = FigletRenderer::new().unwrap();
        let art = renderer.render("Hi", "standard").unwrap();
        assert!(art.lines().count() > 1);
    }

    #[test]
    fn font_lookup_is_case_insensitive() {
        let renderer = FigletRenderer::new().unwrap();
        assert!(renderer.render("x", "Standard").is_ok());
    }

    #[test]
    fn unknown_font_is_a_typed_error() {
        let renderer = FigletRenderer::new().unwrap();
        let err = renderer.render("x", "gothic").unwrap_err();
        assert!(matches!(err, RenderError::UnknownFont { .. }));
    }

    #[test]
    fn unknown_font_still_degrades_to_plain_text() {
        let renderer = FigletRenderer::new().unwrap();
        assert_eq!(render_banner(&renderer, "hello", "gothic"), "hello");
    }
}

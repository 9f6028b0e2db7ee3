//! The `formats` and `presets` listing subcommands.

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use termstyle::formats::OUTPUT_FORMATS;
use termstyle::presets::BUILTIN_PRESETS;
use termstyle::theme::Theme;

/// Pad `text` with spaces up to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(not(tarpaulin_include))]
pub fn handle_formats(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(OUTPUT_FORMATS)?);
        return Ok(());
    }

    let theme = Theme::auto();
    let id_width = OUTPUT_FORMATS
        .iter()
        .map(|f| f.id.width())
        .max()
        .unwrap_or(0);

    println!("{}", theme.heading("Output formats:"));
    for format in OUTPUT_FORMATS {
        println!(
            "  {}  {}",
            theme.accent(&pad(format.id, id_width)),
            theme.dim(format.description)
        );
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_presets(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(BUILTIN_PRESETS)?);
        return Ok(());
    }

    let theme = Theme::auto();
    let id_width = BUILTIN_PRESETS
        .iter()
        .map(|p| p.id.width())
        .max()
        .unwrap_or(0);

    println!("{}", theme.heading("Built-in presets:"));
    for preset in BUILTIN_PRESETS {
        println!(
            "  {}  {}",
            theme.accent(&pad(preset.id, id_width)),
            theme.dim(preset.text)
        );
    }
    Ok(())
}

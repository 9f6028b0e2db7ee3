//! Fixed color lookup tables.
//!
//! Four palettes keyed by the same camelCase color names the UI layer uses:
//! - ANSI SGR parameter codes (foreground and background)
//! - PowerShell console color names (case-sensitive, for -ForegroundColor /
//!   -BackgroundColor flags)
//! - CSS hex values for the preview markup
//!
//! All lookups return `None` for names outside the palette; callers skip the
//! color in that case instead of reporting an error. `"transparent"` is not a
//! background entry - the generators filter it before lookup.

/// ANSI SGR foreground parameter for a color name.
pub fn ansi_fg(name: &str) -> Option<&'static str> {
    match name {
        "red" => Some("31"),
        "green" => Some("32"),
        "yellow" => Some("33"),
        "blue" => Some("34"),
        "purple" => Some("35"),
        "cyan" => Some("36"),
        "pink" => Some("95"),
        "white" => Some("37"),
        "black" => Some("30"),
        _ => None,
    }
}

/// ANSI SGR background parameter for a color name.
pub fn ansi_bg(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("40"),
        "red" => Some("41"),
        "green" => Some("42"),
        "yellow" => Some("43"),
        "blue" => Some("44"),
        "purple" => Some("45"),
        "cyan" => Some("46"),
        "darkGray" => Some("100"),
        "gray" => Some("47"),
        _ => None,
    }
}

/// PowerShell console color name for a foreground color.
///
/// The console palette has no purple or pink, both map to Magenta.
pub fn powershell_fg(name: &str) -> Option<&'static str> {
    match name {
        "red" => Some("Red"),
        "green" => Some("Green"),
        "yellow" => Some("Yellow"),
        "blue" => Some("Blue"),
        "purple" => Some("Magenta"),
        "cyan" => Some("Cyan"),
        "pink" => Some("Magenta"),
        "white" => Some("White"),
        "black" => Some("Black"),
        _ => None,
    }
}

/// PowerShell console color name for a background color.
pub fn powershell_bg(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("Black"),
        "red" => Some("Red"),
        "green" => Some("Green"),
        "yellow" => Some("Yellow"),
        "blue" => Some("Blue"),
        "purple" => Some("Magenta"),
        "cyan" => Some("Cyan"),
        "darkGray" => Some("DarkGray"),
        "gray" => Some("Gray"),
        _ => None,
    }
}

/// CSS hex value for a foreground color in the preview markup.
pub fn preview_fg_hex(name: &str) -> Option<&'static str> {
    match name {
        "red" => Some("#ef4444"),
        "green" => Some("#22c55e"),
        "blue" => Some("#3b82f6"),
        "yellow" => Some("#eab308"),
        "purple" => Some("#a855f7"),
        "pink" => Some("#ec4899"),
        "cyan" => Some("#06b6d4"),
        "white" => Some("#ffffff"),
        "black" => Some("#000000"),
        _ => None,
    }
}

/// CSS hex value for a background color in the preview markup.
pub fn preview_bg_hex(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("#000000"),
        "red" => Some("#ef4444"),
        "green" => Some("#22c55e"),
        "yellow" => Some("#eab308"),
        "blue" => Some("#3b82f6"),
        "purple" => Some("#a855f7"),
        "cyan" => Some("#06b6d4"),
        "darkGray" => Some("#374151"),
        "gray" => Some("#6b7280"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_fg_known_colors() {
        let test_cases = [
            ("red", "31"),
            ("green", "32"),
            ("yellow", "33"),
            ("blue", "34"),
            ("purple", "35"),
            ("cyan", "36"),
            ("pink", "95"),
            ("white", "37"),
            ("black", "30"),
        ];

        for (name, expected) in test_cases {
            assert_eq!(ansi_fg(name), Some(expected), "Failed for {}", name);
        }
    }

    #[test]
    fn ansi_bg_known_colors() {
        let test_cases = [
            ("black", "40"),
            ("red", "41"),
            ("green", "42"),
            ("yellow", "43"),
            ("blue", "44"),
            ("purple", "45"),
            ("cyan", "46"),
            ("darkGray", "100"),
            ("gray", "47"),
        ];

        for (name, expected) in test_cases {
            assert_eq!(ansi_bg(name), Some(expected), "Failed for {}", name);
        }
    }

    #[test]
    fn unknown_names_return_none() {
        assert_eq!(ansi_fg("magenta"), None);
        assert_eq!(ansi_bg("transparent"), None);
        assert_eq!(powershell_fg("orange"), None);
        assert_eq!(preview_fg_hex("darkGray"), None);
    }

    #[test]
    fn purple_and_pink_both_map_to_magenta() {
        assert_eq!(powershell_fg("purple"), Some("Magenta"));
        assert_eq!(powershell_fg("pink"), Some("Magenta"));
    }

    #[test]
    fn fg_and_bg_palettes_differ_in_domain() {
        // pink is foreground-only, darkGray/gray background-only
        assert_eq!(ansi_fg("pink"), Some("95"));
        assert_eq!(ansi_bg("pink"), None);
        assert_eq!(ansi_fg("darkGray"), None);
        assert_eq!(ansi_bg("darkGray"), Some("100"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ansi_fg("Red"), None);
        assert_eq!(ansi_bg("darkgray"), None);
        assert_eq!(powershell_bg("DarkGray"), None);
    }
}

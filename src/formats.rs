//! Output format catalog.
//!
//! Formats are pure selection keys: the catalog names what the CLI can
//! produce, and the `generate` command handler maps an id to the matching
//! generator. Nothing in the core rendering code consumes a format.

use serde::Serialize;

/// Descriptor for one output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputFormat {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All supported output formats.
pub const OUTPUT_FORMATS: &[OutputFormat] = &[
    OutputFormat {
        id: "ansi",
        name: "ANSI sequence",
        description: "Raw escape sequence with SGR color and attribute codes",
    },
    OutputFormat {
        id: "bash",
        name: "Bash command",
        description: "echo -e command with \\033 escape literals",
    },
    OutputFormat {
        id: "python",
        name: "Python statement",
        description: "print() statement with \\033 escape literals",
    },
    OutputFormat {
        id: "powershell",
        name: "PowerShell command",
        description: "Write-Host with native console color flags",
    },
    OutputFormat {
        id: "preview",
        name: "Preview markup",
        description: "Single inline-styled span for visual preview",
    },
    OutputFormat {
        id: "rainbow",
        name: "Rainbow text",
        description: "Per-character color cycle, ANSI or markup form",
    },
    OutputFormat {
        id: "gradient",
        name: "Gradient text",
        description: "Per-character truecolor interpolation, ANSI or markup form",
    },
    OutputFormat {
        id: "banner",
        name: "ASCII-art banner",
        description: "FIGlet block letters, optionally wrapped in a shell command",
    },
];

/// Look up a format descriptor by id.
pub fn find(id: &str) -> Option<&'static OutputFormat> {
    OUTPUT_FORMATS.iter().find(|f| f.id == id)
}

//! CLI definitions.
//!
//! Lives in the library so the xtask man-page generator can build the clap
//! command tree without going through the binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::version;

/// Terminal text styler.
#[derive(Debug, Parser)]
#[command(
    name = "termstyle",
    version,
    long_version = version::LONG_VERSION,
    about = "Turn a styling state into ANSI sequences, shell commands and decorative text"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate styled output for a text
    Generate(GenerateArgs),

    /// List the available output formats
    Formats {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in preset messages
    Presets {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file with the default settings
    Init,
    /// Print the config file path
    Path,
}

#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Text to style
    #[arg(short, long)]
    pub text: Option<String>,

    /// Seed text, colors and styles from a built-in preset
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Output format id (see `termstyle formats`)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Foreground color name (red, green, blue, yellow, purple, pink,
    /// cyan, white, black)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Background color name (black, red, green, yellow, blue, purple,
    /// cyan, darkGray, gray, transparent)
    #[arg(short, long)]
    pub background: Option<String>,

    /// Bold
    #[arg(long)]
    pub bold: bool,

    /// Italic
    #[arg(long)]
    pub italic: bool,

    /// Underline
    #[arg(long)]
    pub underline: bool,

    /// Emit preview markup instead of ANSI (rainbow, gradient, preview)
    #[arg(long)]
    pub markup: bool,

    /// Gradient start color as hex (overrides config)
    #[arg(long, value_name = "HEX")]
    pub gradient_start: Option<String>,

    /// Gradient end color as hex (overrides config)
    #[arg(long, value_name = "HEX")]
    pub gradient_end: Option<String>,

    /// FIGlet font for the banner format (overrides config)
    #[arg(long)]
    pub font: Option<String>,

    /// Wrap banner output in a shell command (bash, python, powershell)
    #[arg(long, value_name = "SHELL")]
    pub wrap: Option<String>,
}

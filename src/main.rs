//! termstyle binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termstyle::cli::{Cli, Commands};

/// Set up tracing output on stderr, honoring RUST_LOG when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::handle(args),
        Commands::Formats { json } => commands::list::handle_formats(json),
        Commands::Presets { json } => commands::list::handle_presets(json),
        Commands::Config { action } => commands::config::handle(action),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

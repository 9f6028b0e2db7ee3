//! The `completions` subcommand.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use termstyle::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

//! Config subcommands handler

use anyhow::Result;

use termstyle::cli::ConfigAction;
use termstyle::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a config file with the default settings, unless one exists.
#[cfg(not(tarpaulin_include))]
fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => handle_show(),
        ConfigAction::Init => handle_init(),
        ConfigAction::Path => handle_path(),
    }
}

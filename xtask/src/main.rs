//! Development tasks for termstyle.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate the man page
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn generate_man(out_dir: &PathBuf) -> Result<()> {
    let command = termstyle::cli::Cli::command();
    let man = clap_mangen::Man::new(command);

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).context("failed to render man page")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join("termstyle.1");
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

//! Command-line entry point for schema_split

use std::path::PathBuf;
use std::process;

use clap::Parser;

use schema_split::{config, utils, Config, Result};

/// Generate per-table SQL files from the built-in schema catalog
#[derive(Parser, Debug)]
#[command(name = "schema_split", version)]
struct Cli {
    /// Output root; files are written under <root>/sql/02-tables/
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None => Config::default(),
    };

    // Flags win over the config file
    if let Some(root) = cli.root {
        config.output.root = root;
    }
    if cli.dry_run {
        config.output.dry_run = true;
    }

    utils::logging::init_logging(&config.logging)?;

    schema_split::run(&config)?;

    Ok(())
}

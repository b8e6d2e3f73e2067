//! Command-line interface for dirdump
//!
//! Provides `concat` and `tree` subcommands. With no flags each one walks the
//! current directory with its built-in exclusions and overwrites a fixed
//! output file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod concat;
mod tree;
mod utils;

/// Concatenate a directory tree into one file, or print it as an indented tree
#[derive(Parser)]
#[command(name = "dirdump")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every non-excluded file's contents into one output file
    Concat(concat::ConcatArgs),

    /// Write an indented listing of the directory tree
    Tree(tree::TreeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A valid RUST_LOG replaces the default filter entirely; otherwise --verbose
    // selects DEBUG. Skip diagnostics are WARN events, so they show by default.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(if cli.verbose { "debug" } else { "warn" }),
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Concat(args) => concat::run(args),
        Commands::Tree(args) => tree::run(args),
    }
}

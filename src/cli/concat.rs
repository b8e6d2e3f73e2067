//! Concat command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{build_exclusions, ensure_directory};
use crate::domain::{Exclusions, DEFAULT_CONCAT_OUTPUT};
use crate::render::{concatenate, write_report};

#[derive(Args)]
pub struct ConcatArgs {
    /// Directory to walk
    #[arg(short, long, value_name = "DIR", default_value = ".", env = "DIRDUMP_ROOT")]
    pub root: PathBuf,

    /// Output file, truncated at the start of every run
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONCAT_OUTPUT,
        env = "DIRDUMP_CONCAT_OUTPUT"
    )]
    pub output: PathBuf,

    /// Also prune these directory names (repeatable or comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub exclude_dir: Vec<String>,

    /// Also skip these extensions, e.g. '.lock,.svg' (repeatable or comma-separated)
    #[arg(long, value_name = "EXTS", value_delimiter = ',', num_args = 1..)]
    pub exclude_ext: Vec<String>,

    /// Also skip these exact file names (repeatable or comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub exclude_file: Vec<String>,

    /// Start from empty exclusion sets instead of the built-in ones
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

pub fn run(args: ConcatArgs) -> Result<()> {
    ensure_directory(&args.root)?;

    let exclusions = build_exclusions(
        Exclusions::concat_defaults(),
        args.no_default_excludes,
        &args.exclude_dir,
        &args.exclude_ext,
        &args.exclude_file,
    );

    let outcome = concatenate(&args.root, &exclusions, &args.output)?;

    if let Some(report_path) = &args.report {
        write_report(report_path, &args.output, &exclusions, &outcome)?;
    }

    let stats = &outcome.stats;
    println!("Combined {} files into {}", stats.files_written, args.output.display());
    if stats.files_unreadable > 0 {
        println!("  Skipped (unreadable): {}", stats.files_unreadable);
    }
    if stats.dirs_unreadable > 0 {
        println!("  Directories not listed: {}", stats.dirs_unreadable);
    }
    if stats.entries_unreadable > 0 {
        println!("  Entries not inspected: {}", stats.entries_unreadable);
    }

    Ok(())
}

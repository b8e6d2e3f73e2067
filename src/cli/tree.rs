//! Tree command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::utils::{build_exclusions, ensure_directory};
use crate::domain::{Exclusions, DEFAULT_TREE_OUTPUT};
use crate::scan::generate_tree;
use crate::utils::resolve_output;

#[derive(Args)]
pub struct TreeArgs {
    /// Directory to list
    #[arg(short, long, value_name = "DIR", default_value = ".", env = "DIRDUMP_ROOT")]
    pub root: PathBuf,

    /// Output file, overwritten on every run
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_TREE_OUTPUT,
        env = "DIRDUMP_TREE_OUTPUT"
    )]
    pub output: PathBuf,

    /// Also hide these directory names (repeatable or comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub exclude_dir: Vec<String>,

    /// Also hide these exact file names (repeatable or comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', num_args = 1..)]
    pub exclude_file: Vec<String>,

    /// Start from empty exclusion sets instead of the built-in ones
    #[arg(long)]
    pub no_default_excludes: bool,
}

pub fn run(args: TreeArgs) -> Result<()> {
    ensure_directory(&args.root)?;

    let exclusions = build_exclusions(
        Exclusions::tree_defaults(),
        args.no_default_excludes,
        &args.exclude_dir,
        &[],
        &args.exclude_file,
    );

    let output_abs = resolve_output(&args.output);
    let (tree, stats) = generate_tree(&args.root, &exclusions, Some(output_abs.as_path()));

    fs::write(&args.output, tree)
        .with_context(|| format!("Failed writing output file: {}", args.output.display()))?;

    info!(
        dirs = stats.dirs_listed,
        files = stats.files_listed,
        excluded = stats.entries_excluded,
        unreadable = stats.dirs_unreadable,
        "Tree written"
    );
    println!("Tree saved to {}", args.output.display());

    Ok(())
}

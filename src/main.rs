//! dirdump: flatten a directory tree into one file, or render it as a tree listing
//!
//! Two subcommands share the same exclusion model: `concat` writes every
//! non-excluded file behind a `=== path ===` header, `tree` writes an
//! indented box-drawing listing.

use anyhow::Result;

mod cli;
mod domain;
mod render;
mod scan;
mod utils;

fn main() -> Result<()> {
    cli::run()
}

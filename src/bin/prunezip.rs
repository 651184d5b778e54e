//! Standalone `prunezip` CLI
//!
//! Prunes a directory tree against a whitelist of path prefixes and
//! optionally zips the result for artifact publishing:
//!   prunezip --whitelist keep.txt --zipname out.zip --inputdir build/out --producezip true

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Use the buildhelper library
use buildhelper::commands;

#[derive(Parser)]
#[clap(name = "prunezip")]
#[clap(about = "Prunes a directory tree against a whitelist and optionally zips it")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Whitelist file: one path prefix per line, trailing / or \ marks a directory prefix
    #[clap(long)]
    whitelist: PathBuf,
    /// Name of the zip archive, placed one level above the input directory
    #[clap(long)]
    zipname: String,
    /// Directory tree to prune
    #[clap(long)]
    inputdir: PathBuf,
    /// "true" produces the zip archive after pruning
    #[clap(long)]
    producezip: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = commands::prune::prune_and_archive(
        &cli.whitelist,
        &cli.zipname,
        &cli.inputdir,
        &cli.producezip,
    )
    .map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // The orchestrator treats any non-zero status as a failed build step.
    std::process::exit(0);
}

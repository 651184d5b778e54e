use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Use the library modules
use buildhelper::commands;

#[derive(Parser)]
#[clap(name = "fetchcopy")]
#[clap(about = "Downloads a file into a local cache and copies it under a new name")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// URL of the file to download
    #[clap(long)]
    fileurl: String,
    /// Destination directory; created if missing, also holds the download cache
    #[clap(long)]
    destdir: PathBuf,
    /// Name to copy the cached file to inside the destination directory
    #[clap(long)]
    newfilename: String,
    /// "true" adds the owner-execute permission to a freshly copied file
    #[clap(long, default_value = "false")]
    addexecright: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = commands::fetch::fetch_and_copy(
        &cli.fileurl,
        &cli.destdir,
        &cli.newfilename,
        &cli.addexecright,
    )
    .map_err(|e| anyhow::anyhow!(e));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

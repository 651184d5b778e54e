use crate::core::download::{self, Downloader};
use crate::error::Result;
use crate::utils::fs;
use std::path::Path;

/// Download `fileurl` into the cache under `destdir`, then copy the cached
/// file to `destdir/newfilename`.
///
/// The cache is keyed by the URL's final path segment only; a present cache
/// file suppresses the download without any staleness check. The copy is
/// skipped when cache and destination modification times already match.
pub fn fetch_and_copy(
    fileurl: &str,
    destdir: &Path,
    newfilename: &str,
    addexecright: &str,
) -> Result<()> {
    let cache_name = download::cache_file_name(fileurl)?;

    fs::ensure_dir_exists(destdir)?;

    let cache_path = destdir.join(cache_name);
    if cache_path.exists() {
        println!("Using cached file {}", cache_path.display());
    } else {
        Downloader::new().download_file(fileurl, &cache_path)?;
    }

    let dest_path = destdir.join(newfilename);

    if dest_path.exists() {
        let cache_mtime = fs::modified_time(&cache_path)?;
        let dest_mtime = fs::modified_time(&dest_path)?;

        if cache_mtime == dest_mtime {
            println!("{} is up to date, skipping copy", dest_path.display());
        } else {
            println!("Updating {} from cache", dest_path.display());
            fs::copy_file_with_mtime(&cache_path, &dest_path)?;
        }
    } else {
        println!(
            "Copying {} to {}",
            cache_path.display(),
            dest_path.display()
        );
        fs::copy_file_with_mtime(&cache_path, &dest_path)?;

        if addexecright.eq_ignore_ascii_case("true") {
            println!("Adding execute permission to {}", dest_path.display());
            fs::add_owner_exec(&dest_path)?;
        }
    }

    Ok(())
}

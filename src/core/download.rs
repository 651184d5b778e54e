use crate::error::{BuildError, Result};
use reqwest::blocking::Client;
use std::path::Path;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }

    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        println!("Downloading from {url}...");

        // Ensure parent directory exists
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;

        let response = client.get(url).send()?;
        if !response.status().is_success() {
            return Err(BuildError::DownloadFailed {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let bytes = response.bytes()?;
        std::fs::write(destination, &bytes)?;

        println!("Downloaded {} bytes to {}", bytes.len(), destination.display());
        Ok(())
    }
}

/// Derive the cache file name from the URL: everything after the last `/`.
pub fn cache_file_name(url: &str) -> Result<&str> {
    let name = match url.rsplit_once('/') {
        Some((_, name)) => name,
        None => url,
    };

    if name.is_empty() {
        return Err(BuildError::InvalidUrl {
            url: url.to_string(),
        });
    }

    Ok(name)
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Download failed: {url} (status {status})")]
    DownloadFailed {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Cannot derive a cache file name from URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Whitelist file not found: {path:?}")]
    WhitelistNotFound { path: PathBuf },

    #[error("Input directory not found: {path:?}")]
    InputDirNotFound { path: PathBuf },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },
}

use crate::error::{BuildError, Result};
use filetime::FileTime;
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => BuildError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => BuildError::from(e),
        })?;
    }
    Ok(())
}

pub fn modified_time(path: &Path) -> Result<FileTime> {
    let metadata = std::fs::metadata(path)?;
    Ok(FileTime::from_last_modification_time(&metadata))
}

/// Copy `from` to `to`, stamping the copy with the source's modification
/// time. The matching mtime is what later runs use to skip the copy.
pub fn copy_file_with_mtime(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        ensure_dir_exists(parent)?;
    }

    std::fs::copy(from, to)?;
    filetime::set_file_mtime(to, modified_time(from)?)?;
    Ok(())
}

pub fn add_owner_exec(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o100);
        std::fs::set_permissions(path, perms)?;
    }

    // On Windows, executable permission is determined by file extension
    #[cfg(windows)]
    {
        let _ = path;
    }

    Ok(())
}

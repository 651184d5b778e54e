use crate::error::Result;
use std::fs::File;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Create a zip archive of `src_dir` at `archive_path`, entry names relative
/// to `src_dir`.
pub fn zip_dir(src_dir: &Path, archive_path: &Path) -> Result<()> {
    let file = File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);

    add_entries(&mut writer, src_dir, "")?;

    writer.finish()?;
    Ok(())
}

fn add_entries(writer: &mut ZipWriter<File>, dir: &Path, prefix: &str) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        let name = if prefix.is_empty() {
            file_name
        } else {
            format!("{prefix}/{file_name}")
        };
        let path = entry.path();

        let options = SimpleFileOptions::default();
        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            options.unix_permissions(entry.metadata()?.permissions().mode())
        };

        if path.is_dir() {
            writer.add_directory(name.as_str(), options)?;
            add_entries(writer, &path, &name)?;
        } else {
            writer.start_file(name.as_str(), options)?;
            let mut input = File::open(&path)?;
            std::io::copy(&mut input, writer)?;
        }
    }

    Ok(())
}

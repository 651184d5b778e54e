use crate::core::archive;
use crate::core::whitelist::Whitelist;
use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};

/// Delete every file under `inputdir` not retained by the whitelist, drop
/// subdirectories left empty, and optionally zip the pruned tree one level
/// above `inputdir`.
pub fn prune_and_archive(
    whitelist_path: &Path,
    zipname: &str,
    inputdir: &Path,
    producezip: &str,
) -> Result<()> {
    let whitelist = Whitelist::load(whitelist_path)?;
    println!(
        "Loaded {} whitelist entries from {}",
        whitelist.entry_count(),
        whitelist_path.display()
    );

    if !inputdir.is_dir() {
        return Err(BuildError::InputDirNotFound {
            path: inputdir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_files(inputdir, "", &mut files)?;

    for (relative, path) in &files {
        if !whitelist.retains(relative) {
            println!("Removing file: {relative}");
            std::fs::remove_file(path)?;
        }
    }

    // The input root itself is kept even when everything inside is gone.
    remove_empty_dirs(inputdir, "")?;

    if producezip.eq_ignore_ascii_case("true") {
        let archive_path = match inputdir.parent() {
            Some(parent) => parent.join(zipname),
            None => PathBuf::from(zipname),
        };

        println!("Creating archive {}", archive_path.display());
        archive::zip_dir(inputdir, &archive_path)?;

        let absolute = std::fs::canonicalize(&archive_path)?;
        println!("##teamcity[publishArtifacts '{}']", absolute.display());
    }

    Ok(())
}

fn collect_files(dir: &Path, prefix: &str, files: &mut Vec<(String, PathBuf)>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            file_name
        } else {
            format!("{prefix}/{file_name}")
        };
        let path = entry.path();

        if path.is_dir() {
            collect_files(&path, &relative, files)?;
        } else {
            files.push((relative, path));
        }
    }

    Ok(())
}

/// Returns true when `dir` ended up empty; the caller removes it.
fn remove_empty_dirs(dir: &Path, prefix: &str) -> Result<bool> {
    let mut remaining = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            file_name
        } else {
            format!("{prefix}/{file_name}")
        };
        let path = entry.path();

        if path.is_dir() {
            if remove_empty_dirs(&path, &relative)? {
                println!("Removing empty directory: {relative}");
                std::fs::remove_dir(&path)?;
            } else {
                remaining += 1;
            }
        } else {
            remaining += 1;
        }
    }

    Ok(remaining == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build_tree(root: &Path) {
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("docs")).unwrap();
        std::fs::write(root.join("src/a.txt"), "a").unwrap();
        std::fs::write(root.join("docs/b.txt"), "b").unwrap();
        std::fs::write(root.join("README.md"), "readme").unwrap();
        std::fs::write(root.join("other.txt"), "other").unwrap();
    }

    fn write_whitelist(path: &Path) {
        std::fs::write(path, "# retained paths\nsrc/\nREADME.md\n").unwrap();
    }

    fn tree_entries(root: &Path) -> Vec<String> {
        let mut entries = Vec::new();
        let mut files = Vec::new();
        collect_files(root, "", &mut files).unwrap();
        for (relative, _) in files {
            entries.push(relative);
        }
        entries.sort();
        entries
    }

    #[test]
    fn test_prune_keeps_only_whitelisted() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("tree");
        build_tree(&input);

        let whitelist = temp.path().join("whitelist.txt");
        write_whitelist(&whitelist);

        prune_and_archive(&whitelist, "out.zip", &input, "false").unwrap();

        assert_eq!(tree_entries(&input), vec!["README.md", "src/a.txt"]);
        // docs/ lost its only file and is gone entirely
        assert!(!input.join("docs").exists());
        assert!(input.exists());
    }

    #[test]
    fn test_prune_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("tree");
        build_tree(&input);

        let whitelist = temp.path().join("whitelist.txt");
        write_whitelist(&whitelist);

        prune_and_archive(&whitelist, "out.zip", &input, "false").unwrap();
        let after_first = tree_entries(&input);

        prune_and_archive(&whitelist, "out.zip", &input, "false").unwrap();
        assert_eq!(tree_entries(&input), after_first);
    }

    #[test]
    fn test_producezip_archives_pruned_tree() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("tree");
        build_tree(&input);

        let whitelist = temp.path().join("whitelist.txt");
        write_whitelist(&whitelist);

        prune_and_archive(&whitelist, "out.zip", &input, "TRUE").unwrap();

        // Archive lands one level above the input directory
        let archive_path = temp.path().join("out.zip");
        assert!(archive_path.exists());

        let mut archive =
            zip::ZipArchive::new(std::fs::File::open(&archive_path).unwrap()).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["README.md", "src/", "src/a.txt"]);
    }

    #[test]
    fn test_nested_empty_dirs_removed_bottom_up() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("tree");
        std::fs::create_dir_all(input.join("a/b/c")).unwrap();
        std::fs::write(input.join("a/b/c/file.txt"), "x").unwrap();
        std::fs::write(input.join("keep.txt"), "k").unwrap();

        let whitelist = temp.path().join("whitelist.txt");
        std::fs::write(&whitelist, "keep.txt\n").unwrap();

        prune_and_archive(&whitelist, "out.zip", &input, "false").unwrap();

        assert!(!input.join("a").exists());
        assert_eq!(tree_entries(&input), vec!["keep.txt"]);
    }

    #[test]
    fn test_missing_whitelist_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("tree");
        std::fs::create_dir_all(&input).unwrap();

        let result = prune_and_archive(
            &temp.path().join("absent.txt"),
            "out.zip",
            &input,
            "false",
        );
        assert!(matches!(
            result,
            Err(BuildError::WhitelistNotFound { .. })
        ));
    }
}

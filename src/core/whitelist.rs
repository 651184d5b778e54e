use crate::error::{BuildError, Result};
use std::path::Path;

/// Path prefixes defining which files survive a prune.
///
/// Entries ending in `/` or `\` are directory prefixes (trailing separator
/// stripped); everything else is a file prefix. Lines starting with `#` or
/// `//` and blank lines are ignored.
#[derive(Debug, Default)]
pub struct Whitelist {
    dir_prefixes: Vec<String>,
    file_prefixes: Vec<String>,
}

impl Whitelist {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BuildError::WhitelistNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut dir_prefixes = Vec::new();
        let mut file_prefixes = Vec::new();

        for line in content.lines() {
            let entry = line.trim();

            if entry.is_empty() || entry.starts_with('#') || entry.starts_with("//") {
                continue;
            }

            if entry.ends_with('/') || entry.ends_with('\\') {
                dir_prefixes.push(entry[..entry.len() - 1].to_string());
            } else {
                file_prefixes.push(entry.to_string());
            }
        }

        Whitelist {
            dir_prefixes,
            file_prefixes,
        }
    }

    /// Whether a relative path is kept. Plain string-prefix comparison, not
    /// path-segment-aware: entry `abc` also matches `abcdef/x`.
    pub fn retains(&self, relative_path: &str) -> bool {
        self.dir_prefixes
            .iter()
            .chain(self.file_prefixes.iter())
            .any(|prefix| relative_path.starts_with(prefix.as_str()))
    }

    pub fn entry_count(&self) -> usize {
        self.dir_prefixes.len() + self.file_prefixes.len()
    }
}

use crate::ignore::IgnoreMatcher;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One discovered file. Its full location is `directory/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRecord {
    /// Directory the file lives in.
    pub directory: PathBuf,

    /// File name within `directory`.
    pub name: String,
}

impl FileRecord {
    /// Resolved full path of the record.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }
}

/// Scans `root` and returns every file beneath it that survives the ignore
/// patterns.
///
/// - A missing `root` yields an empty set, not an error.
/// - A file `root` yields a single record, with the patterns applied to its
///   basename.
/// - A directory `root` is walked recursively, hidden entries included.
///   Symbolic links are followed; walkdir's ancestor check breaks link
///   cycles, and such entries are skipped with a warning. Patterns are
///   matched against each file's path relative to `root`. Directories are
///   never emitted, only the files beneath them.
#[must_use]
pub fn scan(root: &Path, patterns: &[String]) -> Vec<FileRecord> {
    let matcher = IgnoreMatcher::new(patterns);
    let mut files = Vec::new();

    if !root.exists() {
        debug!(root = %root.display(), "scan root does not exist");
        return files;
    }

    if root.is_file() {
        if let Some(name) = root.file_name().map(|n| n.to_string_lossy().into_owned()) {
            if !matcher.is_match(&name) {
                let directory = root.parent().unwrap_or(Path::new("")).to_path_buf();
                files.push(FileRecord { directory, name });
            }
        }
        return files;
    }

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(&relative.to_string_lossy()) {
            continue;
        }

        files.push(FileRecord {
            directory: path.parent().unwrap_or(root).to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
        });
    }

    debug!(root = %root.display(), count = files.len(), "scan complete");
    files
}

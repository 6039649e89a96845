use crate::scanner::FileRecord;
use crate::utils::paths::{ensure_parent_dirs, home_relative};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mirrors the file set into `target`, preserving each file's path relative
/// to `home`. Returns the number of records copied.
///
/// The operation is additive and overwriting: existing destination files
/// are replaced, files present only at the target are left alone. Parent
/// directories are created as needed. Records sharing a resolved full path
/// are copied once.
///
/// # Errors
///
/// Returns an error if a record lies outside `home`, or if a directory or
/// copy operation fails. Completed copies are not rolled back.
pub fn mirror(files: &[FileRecord], home: &Path, target: &Path) -> Result<usize> {
    let mut sources: Vec<PathBuf> = files.iter().map(FileRecord::full_path).collect();
    sources.sort();
    sources.dedup();

    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create target directory {}", target.display()))?;

    let mut copied = 0;
    for source in &sources {
        let relative = home_relative(source, home)?;
        let destination = target.join(&relative);

        ensure_parent_dirs(&destination)?;
        debug!(from = %source.display(), to = %destination.display(), "copying");
        copy_recursive(source, &destination)?;
        copied += 1;
    }

    Ok(copied)
}

/// Copies `source` to `destination`; a directory source is copied with its
/// whole subtree.
fn copy_recursive(source: &Path, destination: &Path) -> Result<()> {
    if source.is_dir() {
        fs::create_dir_all(destination)
            .with_context(|| format!("Failed to create directory {}", destination.display()))?;
        for entry in fs::read_dir(source)
            .with_context(|| format!("Failed to read directory {}", source.display()))?
        {
            let entry = entry?;
            copy_recursive(&entry.path(), &destination.join(entry.file_name()))?;
        }
    } else {
        fs::copy(source, destination).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                source.display(),
                destination.display()
            )
        })?;
    }
    Ok(())
}

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expresses `path` relative to `home`.
///
/// # Errors
///
/// Returns an error if `path` is not under `home`; callers treat such files
/// as unsafe to mirror rather than resolving them through `..` segments.
pub fn home_relative(path: &Path, home: &Path) -> Result<PathBuf> {
    path.strip_prefix(home)
        .map(Path::to_path_buf)
        .with_context(|| {
            format!(
                "{} is outside the home directory {}",
                path.display(),
                home.display()
            )
        })
}

/// Creates the parent directories of `path` if they are absent.
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create parent directories for {}", path.display())
        })?;
    }
    Ok(())
}

/// Expands a leading `~` or `~/` to `home`. Any other path is returned
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    if text == "~" {
        home.to_path_buf()
    } else if let Some(rest) = text.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}

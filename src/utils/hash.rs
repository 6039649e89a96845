use crate::scanner::FileRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use xxhash_rust::xxh3::Xxh3;

/// Computes a fingerprint over the file set's paths and contents.
///
/// Records are deduplicated and sorted by resolved full path before being
/// fed to the digest, so the result is invariant to discovery order. Each
/// file contributes its full path, a NUL separator, and its byte content.
/// The digest is xxHash3-128, formatted as 32 lowercase hex characters.
///
/// # Errors
///
/// Returns an error if any file in the set cannot be read.
pub fn fingerprint(files: &[FileRecord]) -> Result<String> {
    let mut paths: Vec<PathBuf> = files.iter().map(FileRecord::full_path).collect();
    paths.sort();
    paths.dedup();

    let mut hasher = Xxh3::new();
    let mut buffer = vec![0u8; 65536];

    for path in &paths {
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(b"\0");

        let mut file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        loop {
            let bytes_read = file
                .read(&mut buffer)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }
    }

    Ok(format!("{:032x}", hasher.digest128()))
}

/// Returns true when the new fingerprint equals the stored one, meaning the
/// mirror step can be skipped.
#[must_use]
pub fn is_unchanged(new_fingerprint: &str, stored_fingerprint: &str) -> bool {
    new_fingerprint == stored_fingerprint
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(dir: &std::path::Path, name: &str, content: &str) -> FileRecord {
        fs::write(dir.join(name), content).unwrap();
        FileRecord {
            directory: dir.to_path_buf(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_fingerprint_is_order_invariant() {
        let temp = TempDir::new().unwrap();
        let a = record(temp.path(), "a", "alpha");
        let b = record(temp.path(), "b", "beta");

        let forward = fingerprint(&[a.clone(), b.clone()]).unwrap();
        let reversed = fingerprint(&[b, a]).unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward.len(), 32);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let temp = TempDir::new().unwrap();
        let a = record(temp.path(), "a", "alpha");

        let before = fingerprint(std::slice::from_ref(&a)).unwrap();
        fs::write(temp.path().join("a"), "changed").unwrap();
        let after = fingerprint(&[a]).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_duplicate_records_do_not_change_the_fingerprint() {
        let temp = TempDir::new().unwrap();
        let a = record(temp.path(), "a", "alpha");

        let single = fingerprint(std::slice::from_ref(&a)).unwrap();
        let doubled = fingerprint(&[a.clone(), a]).unwrap();
        assert_eq!(single, doubled);
    }

    #[test]
    fn test_fingerprint_depends_on_path() {
        let temp = TempDir::new().unwrap();
        let a = record(temp.path(), "a", "same");
        let b = record(temp.path(), "b", "same");

        let only_a = fingerprint(&[a]).unwrap();
        let only_b = fingerprint(&[b]).unwrap();
        assert_ne!(only_a, only_b);
    }

    #[test]
    fn test_empty_set_is_stable() {
        assert_eq!(fingerprint(&[]).unwrap(), fingerprint(&[]).unwrap());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = FileRecord {
            directory: temp.path().to_path_buf(),
            name: "missing".to_string(),
        };
        assert!(fingerprint(&[missing]).is_err());
    }

    #[test]
    fn test_is_unchanged() {
        assert!(is_unchanged("abc", "abc"));
        assert!(!is_unchanged("abc", "def"));
        assert!(!is_unchanged("abc", ""));
    }
}

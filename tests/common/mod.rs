use anyhow::Result;
use dotsync::SyncContext;
use dotsync::config::SyncConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a fake home directory, a mirror target, and a context
/// whose config was round-tripped through disk.
pub struct TestHome {
    pub temp_dir: TempDir,
    pub ctx: SyncContext,
}

impl TestHome {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&home)?;

        let config_path = temp_dir.path().join("dot.config.json");
        let config = SyncConfig {
            target: temp_dir.path().join("mirror"),
            directories: Vec::new(),
            ignore: Vec::new(),
            files: Vec::new(),
            last_fingerprint: String::new(),
        };
        config.save(&config_path)?;

        let ctx = SyncContext::new_explicit(config_path, home)?;
        Ok(Self { temp_dir, ctx })
    }

    /// Writes a file under the fake home and returns its full path.
    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.ctx.home.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Full path of a file inside the mirror target.
    pub fn mirrored(&self, relative: &str) -> PathBuf {
        self.ctx.config.target.join(relative)
    }
}

use crate::output;
use crate::scanner::FileRecord;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persisted configuration for the synchronizer.
///
/// Stored as a single pretty-printed JSON document. The `files` field is the
/// discovered file set of the current process and is never written back to
/// disk; every scan replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Root of the mirror tree files are copied into.
    #[serde(default)]
    pub target: PathBuf,

    /// Home-relative paths (files or directories) to scan.
    #[serde(default)]
    pub directories: Vec<PathBuf>,

    /// Glob patterns excluding files from the scan, matched against paths
    /// relative to the directory being scanned.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Transient discovered file set. Never persisted.
    #[serde(skip_serializing, default)]
    pub files: Vec<FileRecord>,

    /// Fingerprint of the file set at the time of the last successful sync.
    #[serde(default)]
    pub last_fingerprint: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::new(),
            directories: default_directories(),
            ignore: default_ignore_patterns(),
            files: Vec::new(),
            last_fingerprint: String::new(),
        }
    }
}

/// Directories scanned by a fresh configuration.
fn default_directories() -> Vec<PathBuf> {
    [
        ".config/alacritty",
        ".config/hypr",
        ".config/i3",
        ".config/nvim",
        ".config/polybar",
        ".config/tofi",
        ".config/waybar",
        ".config/dunst",
        ".config/rofi",
        ".config/kitty",
        ".config/tmux",
        ".config/zsh",
        ".config/fish",
        ".config/starship",
        ".config/git",
        ".config/gtk-3.0",
        ".bashrc",
        ".zshrc",
        ".vimrc",
        ".xinitrc",
        ".xprofile",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Exclusions applied by a fresh configuration. Secrets, caches, and build
/// artifacts never belong in a dotfiles mirror.
fn default_ignore_patterns() -> Vec<String> {
    [
        "**/.env",
        "**/.env.local",
        "**/.env.production",
        "**/.env.development",
        "**/id_rsa",
        "**/id_ed25519",
        "**/*.pem",
        "**/*.key",
        "**/secrets.json",
        "**/auth.json",
        "**/.authinfo",
        "**/cache/**",
        "**/Cache/**",
        "**/tmp/**",
        "**/temp/**",
        "**/.cache/**",
        "**/node_modules/**",
        "**/__pycache__/**",
        "**/.pytest_cache/**",
        "**/*.log",
        "**/logs/**",
        "**/*.db",
        "**/*.sqlite",
        "**/*.sqlite3",
        "**/*.o",
        "**/*.so",
        "**/*.dylib",
        "**/.git/**",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl SyncConfig {
    /// Loads the configuration from `path`, creating a default file first if
    /// none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// loaded `target` is empty. A default file has an empty target, so the
    /// very first run fails here and asks the user to fill it in.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            output::print_info(&format!("creating config file at: {}", path.display()));
            let config = Self::default();
            config.save(path)?;
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.target.as_os_str().is_empty() {
            bail!(
                "config: missing target (set the \"target\" field in {})",
                path.display()
            );
        }

        if !config.target.exists() {
            output::print_warning("config: target location does not exist");
        }

        Ok(config)
    }

    /// Saves the configuration to `path` as pretty-printed JSON. The
    /// transient `files` field is skipped by serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create config file {}", path.display()))?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

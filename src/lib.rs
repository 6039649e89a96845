//! # Dotsync - Menu-Driven Dotfile Synchronizer
//!
//! Dotsync mirrors a configured set of files and directories from the user's
//! home into a target tree, preserving home-relative paths. A content
//! fingerprint over the discovered file set makes repeated runs cheap: when
//! nothing changed since the last sync, the mirror step is skipped entirely.
//!
//! The tool is driven by a hierarchical menu rather than subcommands; the
//! menu state machine lives in [`menu`] and dispatches into [`actions`].
//!
//! ## Architecture
//!
//! - [`config`]: JSON configuration loading and persistence
//! - [`ignore`]: glob-based exclusion of scanned paths
//! - [`scanner`]: filesystem traversal producing the discovered file set
//! - [`mirror`]: path-preserving copy of the file set into the target
//! - [`tree`]: hierarchical rendering of the discovered file set
//! - [`menu`]: menu registry, transition logic, and the interactive loop
//! - [`actions`]: the action handlers wired into the menu graph
//! - [`git`]: commit history provider for the history menu
//! - [`utils`]: hashing and path helpers

/// Menu action handlers and the menu graph definition.
pub mod actions;

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Configuration loading, validation, and persistence.
pub mod config;

/// Git commit history provider.
pub mod git;

/// Glob-based ignore pattern matching.
pub mod ignore;

/// Menu registry, state machine, and interactive loop.
pub mod menu;

/// Path-preserving mirroring of discovered files into the target tree.
pub mod mirror;

/// User-facing output helpers.
pub mod output;

/// Filesystem scanning and file discovery.
pub mod scanner;

/// Path tree building and rendering.
pub mod tree;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the dotsync binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file name, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "dot.config.json";

/// Id of the menu the navigator starts on.
pub const ROOT_MENU_ID: &str = "main";

/// Central context for all dotsync operations.
///
/// Holds the loaded configuration, the path it came from, and the home
/// directory every mirrored path is made relative to. The context is passed
/// explicitly into the action dispatcher; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Path to the JSON configuration file.
    pub config_path: PathBuf,

    /// Home directory used as the base for relative mirroring.
    pub home: PathBuf,

    /// Loaded configuration, including the transient discovered file set.
    pub config: config::SyncConfig,
}

impl SyncContext {
    /// Creates a context by loading the configuration from `config_override`
    /// or, if absent, from `dot.config.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// configuration cannot be loaded (including a missing `target`).
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(path) => path,
            None => std::env::current_dir()
                .context("Could not determine current directory")?
                .join(DEFAULT_CONFIG_FILE),
        };
        let home = dirs::home_dir().context("Could not find home directory")?;
        Self::new_explicit(config_path, home)
    }

    /// Creates a context with explicit paths. Used by tests to avoid
    /// touching the real home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn new_explicit(config_path: PathBuf, home: PathBuf) -> Result<Self> {
        let config = config::SyncConfig::load(&config_path)?;
        Ok(Self {
            config_path,
            home,
            config,
        })
    }

    /// Persists the current configuration back to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_config(&self) -> Result<()> {
        self.config.save(&self.config_path)
    }
}

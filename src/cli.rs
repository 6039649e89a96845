use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the dotsync binary.
///
/// Dotsync is interactive; the flags here only adjust where the
/// configuration lives and how chatty the logs are. Everything else is
/// driven through the menu.
#[derive(Parser, Debug)]
#[command(
    name = "dotsync",
    version = crate::VERSION,
    about = "Menu-driven personal dotfile synchronizer",
    long_about = "Scans configured directories under your home, filters them through \
                  ignore patterns, and mirrors the surviving files into a target tree \
                  at their home-relative paths. Runs are skipped when a content \
                  fingerprint shows nothing changed since the last sync."
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./dot.config.json)
    #[arg(short, long, env = "DOTSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

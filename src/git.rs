use crate::menu::{BACK, Choice};
use crate::output;
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Commit metadata as reported by `git log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash.
    pub hash: String,

    /// Author name.
    pub author: String,

    /// Author date, as formatted by git.
    pub date: String,

    /// First line of the commit message.
    pub subject: String,
}

impl Commit {
    /// Hash truncated to eight characters for display.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }
}

/// Format string making `git log` emit one tab-separated record per commit.
const LOG_FORMAT: &str = "--format=%H%x09%an%x09%ad%x09%s";

/// Prefix distinguishing commit selections from other action identifiers.
pub const COMMIT_ACTION_PREFIX: &str = "commit:";

/// Returns the commit history of the repository at `repo`, newest first.
///
/// # Errors
///
/// Returns an error if `repo` does not exist or `git log` fails (for
/// example when `repo` is not a git repository).
pub fn commit_log(repo: &Path) -> Result<Vec<Commit>> {
    if !repo.exists() {
        bail!("repository path {} does not exist", repo.display());
    }

    let output = Command::new("git")
        .arg("log")
        .arg(LOG_FORMAT)
        .current_dir(repo)
        .stdin(Stdio::null())
        .output()
        .context("Failed to run git log")?;

    if !output.status.success() {
        bail!("git log failed in {}", repo.display());
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let commits: Vec<Commit> = text.lines().filter_map(parse_record).collect();
    debug!(repo = %repo.display(), count = commits.len(), "read commit history");
    Ok(commits)
}

/// Returns the metadata of a single commit.
///
/// # Errors
///
/// Returns an error if the repository or the commit cannot be read.
pub fn commit_details(repo: &Path, hash: &str) -> Result<Commit> {
    if !repo.exists() {
        bail!("repository path {} does not exist", repo.display());
    }

    let output = Command::new("git")
        .args(["log", "-1", LOG_FORMAT, hash])
        .current_dir(repo)
        .stdin(Stdio::null())
        .output()
        .context("Failed to run git log")?;

    if !output.status.success() {
        bail!("no commit {hash} in {}", repo.display());
    }

    let text = String::from_utf8_lossy(&output.stdout);
    text.lines()
        .find_map(parse_record)
        .with_context(|| format!("unparseable git output for commit {hash}"))
}

/// Parses one tab-separated `hash author date subject` record.
fn parse_record(line: &str) -> Option<Commit> {
    let mut parts = line.splitn(4, '\t');
    Some(Commit {
        hash: parts.next()?.to_string(),
        author: parts.next()?.to_string(),
        date: parts.next()?.to_string(),
        subject: parts.next().unwrap_or("").to_string(),
    })
}

/// Builds the history menu's choice list: a leading back entry followed by
/// one entry per commit. A missing repository or failing git invocation
/// yields just the back entry, with a warning, never a crash.
#[must_use]
pub fn commit_choices(repo: &Path) -> Vec<Choice> {
    let mut choices = vec![Choice::new("← back", BACK)];

    match commit_log(repo) {
        Ok(commits) => {
            for commit in commits {
                choices.push(Choice::new(
                    format!("({}) {}", commit.short_hash(), commit.subject),
                    format!("{COMMIT_ACTION_PREFIX}{}", commit.hash),
                ));
            }
        }
        Err(e) => {
            output::print_warning(&format!("failed to read git history: {e:#}"));
        }
    }

    choices
}

use crate::menu::prompt::Prompter;
use crate::{SyncContext, git};
use anyhow::Result;

/// Shows the metadata of a commit selected in the history menu.
///
/// # Errors
///
/// Returns an error if the target repository or the commit cannot be read.
pub fn show<P: Prompter>(hash: &str, ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    let commit = git::commit_details(&ctx.config.target, hash)?;

    println!("commit  {}", commit.hash);
    println!("author  {}", commit.author);
    println!("date    {}", commit.date);
    println!();
    println!("    {}", commit.subject);

    prompter.pause();
    Ok(())
}

use crate::menu::prompt::Prompter;
use crate::menu::{BACK, Choice};
use crate::utils::paths::expand_tilde;
use crate::{SyncContext, output};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Prompts for a new target path and persists it. `~` is expanded against
/// the home directory; an empty answer leaves the target unchanged.
///
/// # Errors
///
/// Returns an error if the prompt fails or the config cannot be saved.
pub fn set_target<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    let raw = prompter.input("target path")?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        output::print_warning("target unchanged");
        return Ok(());
    }

    ctx.config.target = expand_tilde(Path::new(trimmed), &ctx.home);
    ctx.save_config()?;
    output::print_success(&format!("target set to {}", ctx.config.target.display()));
    Ok(())
}

/// Prompts for a home-relative path and appends it to the scan list.
///
/// # Errors
///
/// Returns an error if the prompt fails or the config cannot be saved.
pub fn add_directory<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    let raw = prompter.input("directory (relative to home)")?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        output::print_warning("nothing added");
        return Ok(());
    }

    let directory = PathBuf::from(trimmed);
    if ctx.config.directories.contains(&directory) {
        output::print_info(&format!("{trimmed} is already configured"));
        return Ok(());
    }

    ctx.config.directories.push(directory);
    ctx.save_config()?;
    output::print_success(&format!("added {trimmed}"));
    Ok(())
}

/// Offers the configured directories for selection and removes the chosen
/// one.
///
/// # Errors
///
/// Returns an error if the prompt fails or the config cannot be saved.
pub fn remove_directory<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    if ctx.config.directories.is_empty() {
        output::print_info("no directories configured");
        prompter.pause();
        return Ok(());
    }

    let mut choices = vec![Choice::new("← back", BACK)];
    choices.extend(ctx.config.directories.iter().map(|dir| {
        let text = dir.display().to_string();
        Choice::new(text.clone(), text)
    }));

    let value = prompter.select("remove which directory?", &choices)?;
    if value == BACK {
        return Ok(());
    }

    let chosen = PathBuf::from(&value);
    ctx.config.directories.retain(|dir| *dir != chosen);
    ctx.save_config()?;
    output::print_success(&format!("removed {value}"));
    Ok(())
}

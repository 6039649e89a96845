use crate::menu::prompt::Prompter;
use crate::utils::hash;
use crate::{SyncContext, mirror, output, scanner};
use anyhow::Result;
use tracing::debug;

/// Rescans the configured directories and, if the file set's fingerprint
/// differs from the last sync, mirrors it into the target.
///
/// # Errors
///
/// Returns an error if fingerprinting, mirroring, or saving the updated
/// configuration fails. The stored fingerprint is only replaced after the
/// mirror pass completed in full.
pub fn execute<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    refresh_files(ctx);
    sync(ctx, prompter)
}

/// Replaces the discovered file set by scanning every configured directory
/// under the home directory. The previous set is discarded wholesale.
pub fn refresh_files(ctx: &mut SyncContext) {
    output::print_info("updating files...");

    let mut files = Vec::new();
    for dir in &ctx.config.directories {
        let root = ctx.home.join(dir);
        let found = scanner::scan(&root, &ctx.config.ignore);
        debug!(root = %root.display(), count = found.len(), "scanned");
        files.extend(found);
    }

    ctx.config.files = files;
}

/// Runs the change-detection gate and the mirror pass.
fn sync<P: Prompter>(ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    output::print_info(&format!("found {} files", ctx.config.files.len()));

    if ctx.config.files.is_empty() {
        prompter.pause();
        return Ok(());
    }

    if ctx.config.target.as_os_str().is_empty() {
        output::print_error("no target path found on config...");
        prompter.pause();
        return Ok(());
    }

    let fingerprint = hash::fingerprint(&ctx.config.files)?;
    if hash::is_unchanged(&fingerprint, &ctx.config.last_fingerprint) {
        output::print_info("0 changes since last update");
        prompter.pause();
        return Ok(());
    }

    let target = ctx.config.target.clone();
    let copied = mirror::mirror(&ctx.config.files, &ctx.home, &target)?;

    ctx.config.last_fingerprint = fingerprint;
    ctx.save_config()?;

    output::print_success(&format!("updated {copied} files"));
    prompter.pause();
    Ok(())
}

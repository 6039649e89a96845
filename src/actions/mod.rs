//! Action handlers dispatched from the menu loop, and the menu graph
//! definition wiring them together.

/// Configuration edits (target, scanned directories).
pub mod config;

/// Commit detail display for the history menu.
pub mod history;

/// File tree listing.
pub mod list;

/// Scan and mirror pipeline.
pub mod update;

use crate::menu::prompt::Prompter;
use crate::menu::{BACK, Choice, Choices, EXIT, Menu, MenuRegistry};
use crate::{SyncContext, git};
use anyhow::Result;
use tracing::debug;

/// Action id: rescan the configured directories and mirror into the target.
pub const UPDATE_DOTFILES: &str = "update_dotfiles";

/// Action id: render the discovered file set as a tree.
pub const LIST_FILES: &str = "list_files";

/// Action id: prompt for and store a new target path.
pub const SET_TARGET: &str = "set_target";

/// Action id: add a directory to the scan list.
pub const ADD_DIRECTORY: &str = "add_directory";

/// Action id: remove a directory from the scan list.
pub const REMOVE_DIRECTORY: &str = "remove_directory";

/// Dispatches a terminal menu choice to its handler.
///
/// Unknown identifiers are ignored; the loop simply shows the menu again.
///
/// # Errors
///
/// Propagates the handler's error; the menu loop reports it inline and
/// keeps running.
pub fn dispatch<P: Prompter>(action: &str, ctx: &mut SyncContext, prompter: &mut P) -> Result<()> {
    match action {
        UPDATE_DOTFILES => update::execute(ctx, prompter),
        LIST_FILES => list::execute(ctx, prompter),
        SET_TARGET => config::set_target(ctx, prompter),
        ADD_DIRECTORY => config::add_directory(ctx, prompter),
        REMOVE_DIRECTORY => config::remove_directory(ctx, prompter),
        _ => {
            if let Some(hash) = action.strip_prefix(git::COMMIT_ACTION_PREFIX) {
                history::show(hash, ctx, prompter)
            } else {
                debug!(action, "ignoring unknown menu action");
                Ok(())
            }
        }
    }
}

/// Builds the menu graph: `main` at the root, with the dotfiles, config,
/// and history menus beneath it. The history menu's choices are produced
/// fresh on every visit from the target repository's git log.
#[must_use]
pub fn build_menus() -> MenuRegistry<SyncContext> {
    let mut registry = MenuRegistry::new();

    registry.register(Menu {
        id: "main".to_string(),
        parent: None,
        name: "main menu".to_string(),
        message: "options:".to_string(),
        choices: Choices::Static(vec![
            Choice::new("dotfiles", "files"),
            Choice::new("config", "config"),
            Choice::new("history", "history"),
            Choice::new("exit", EXIT),
        ]),
    });

    registry.register(Menu {
        id: "files".to_string(),
        parent: Some("main".to_string()),
        name: "manage dotfiles".to_string(),
        message: "options:".to_string(),
        choices: Choices::Static(vec![
            Choice::new("update", UPDATE_DOTFILES),
            Choice::new("list files", LIST_FILES),
            Choice::new("← back", BACK),
        ]),
    });

    registry.register(Menu {
        id: "config".to_string(),
        parent: Some("main".to_string()),
        name: "config".to_string(),
        message: "options:".to_string(),
        choices: Choices::Static(vec![
            Choice::new("set target", SET_TARGET),
            Choice::new("add directory", ADD_DIRECTORY),
            Choice::new("remove directory", REMOVE_DIRECTORY),
            Choice::new("← back", BACK),
        ]),
    });

    registry.register(Menu {
        id: "history".to_string(),
        parent: Some("main".to_string()),
        name: "target history".to_string(),
        message: "commits:".to_string(),
        choices: Choices::Dynamic(Box::new(|ctx: &SyncContext| {
            git::commit_choices(&ctx.config.target)
        })),
    });

    registry
}

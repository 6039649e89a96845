//! Menu registry and the state machine driving the interactive loop.
//!
//! Menus form a rooted tree addressed by id. A choice resolves to one of
//! the reserved tokens (`back`, `exit`), another menu's id, or an opaque
//! action identifier handed to the action handler. Transition resolution
//! is a pure function over the registry so it can be tested without I/O.

/// Interactive prompt implementations.
pub mod prompt;

use crate::output;
use anyhow::Result;
use prompt::Prompter;
use std::collections::HashMap;
use tracing::debug;

/// Reserved choice value ascending to the parent menu.
pub const BACK: &str = "back";

/// Reserved choice value ending the menu loop.
pub const EXIT: &str = "exit";

/// One selectable entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,

    /// Menu id, reserved token, or action identifier.
    pub value: String,
}

impl Choice {
    /// Creates a choice from any pair of string-likes.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A menu's choices: either a fixed list or a producer re-evaluated on
/// every visit. `C` is the context type producers read from.
pub enum Choices<C> {
    /// Fixed list registered at startup.
    Static(Vec<Choice>),

    /// Producer invoked fresh each time the menu is shown; may perform I/O.
    Dynamic(Box<dyn Fn(&C) -> Vec<Choice>>),
}

impl<C> Choices<C> {
    /// Evaluates the choices for one visit.
    #[must_use]
    pub fn evaluate(&self, ctx: &C) -> Vec<Choice> {
        match self {
            Self::Static(choices) => choices.clone(),
            Self::Dynamic(producer) => producer(ctx),
        }
    }
}

/// One registered menu.
pub struct Menu<C> {
    /// Unique id the menu is addressed by.
    pub id: String,

    /// Parent menu id; `None` only for the root.
    pub parent: Option<String>,

    /// Heading shown when the menu is entered.
    pub name: String,

    /// Prompt message shown above the choices.
    pub message: String,

    /// Selectable entries.
    pub choices: Choices<C>,
}

/// Registry of all menus, addressed by id. Registered once at startup and
/// read-only afterwards.
pub struct MenuRegistry<C> {
    menus: HashMap<String, Menu<C>>,
}

impl<C> Default for MenuRegistry<C> {
    fn default() -> Self {
        Self {
            menus: HashMap::new(),
        }
    }
}

impl<C> MenuRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a menu under its id, replacing any previous entry.
    pub fn register(&mut self, menu: Menu<C>) {
        self.menus.insert(menu.id.clone(), menu);
    }

    /// Looks up a menu by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Menu<C>> {
        self.menus.get(id)
    }

    /// Returns true if a menu with `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.menus.contains_key(id)
    }
}

/// Outcome of resolving a chosen value against the current menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// End the loop.
    Exit,

    /// Move to the parent menu.
    Ascend(String),

    /// Move into a registered submenu.
    Descend(String),

    /// Stay on the current menu; `back` at the root resolves here.
    Stay,

    /// Forward the value to the action handler and stay.
    Action(String),
}

/// Resolves a chosen `value` for a menu with the given `parent`.
#[must_use]
pub fn resolve_transition<C>(
    registry: &MenuRegistry<C>,
    parent: Option<&str>,
    value: &str,
) -> Transition {
    if value == EXIT {
        return Transition::Exit;
    }
    if value == BACK {
        return match parent {
            Some(id) => Transition::Ascend(id.to_string()),
            None => Transition::Stay,
        };
    }
    if registry.contains(value) {
        return Transition::Descend(value.to_string());
    }
    Transition::Action(value.to_string())
}

/// Runs the menu loop from `root` until the user exits.
///
/// Dynamic choices are re-evaluated on every visit; nothing is cached
/// between visits. A lookup of an unregistered menu id ends the loop
/// gracefully. Action handler failures are reported inline and the loop
/// continues; only prompt I/O failures propagate.
///
/// # Errors
///
/// Returns an error if the prompter fails.
pub fn run_menu_loop<C, P, F>(
    registry: &MenuRegistry<C>,
    root: &str,
    ctx: &mut C,
    prompter: &mut P,
    mut handle_action: F,
) -> Result<()>
where
    P: Prompter,
    F: FnMut(&str, &mut C, &mut P) -> Result<()>,
{
    let mut current = root.to_string();

    loop {
        let Some(menu) = registry.get(&current) else {
            debug!(menu = %current, "menu id not registered, leaving loop");
            break;
        };
        let choices = menu.choices.evaluate(ctx);

        output::print_heading(&menu.name);

        if choices.is_empty() {
            // Nothing selectable; an empty menu cannot be escaped
            // interactively, so ascend (or leave, at the root).
            output::print_info("nothing to show here");
            prompter.pause();
            match &menu.parent {
                Some(id) => current = id.clone(),
                None => break,
            }
            continue;
        }

        let value = prompter.select(&menu.message, &choices)?;

        match resolve_transition(registry, menu.parent.as_deref(), &value) {
            Transition::Exit => break,
            Transition::Ascend(id) | Transition::Descend(id) => current = id,
            Transition::Stay => {}
            Transition::Action(action) => {
                if let Err(e) = handle_action(&action, ctx, prompter) {
                    output::print_error(&format!("{e:#}"));
                    prompter.pause();
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt::ScriptedPrompter;

    fn static_menu(id: &str, parent: Option<&str>, values: &[(&str, &str)]) -> Menu<()> {
        Menu {
            id: id.to_string(),
            parent: parent.map(ToString::to_string),
            name: format!("{id} menu"),
            message: "options:".to_string(),
            choices: Choices::Static(
                values.iter().map(|(l, v)| Choice::new(*l, *v)).collect(),
            ),
        }
    }

    fn registry() -> MenuRegistry<()> {
        let mut registry = MenuRegistry::new();
        registry.register(static_menu(
            "main",
            None,
            &[("dotfiles", "files"), ("exit", "exit")],
        ));
        registry.register(static_menu(
            "files",
            Some("main"),
            &[("update", "update_dotfiles"), ("← back", "back")],
        ));
        registry
    }

    #[test]
    fn test_submenu_id_descends() {
        let registry = registry();
        assert_eq!(
            resolve_transition(&registry, None, "files"),
            Transition::Descend("files".to_string())
        );
    }

    #[test]
    fn test_back_ascends_to_parent() {
        let registry = registry();
        assert_eq!(
            resolve_transition(&registry, Some("main"), "back"),
            Transition::Ascend("main".to_string())
        );
    }

    #[test]
    fn test_back_without_parent_is_a_noop() {
        let registry = registry();
        assert_eq!(resolve_transition(&registry, None, "back"), Transition::Stay);
    }

    #[test]
    fn test_exit_always_terminates() {
        let registry = registry();
        assert_eq!(resolve_transition(&registry, None, "exit"), Transition::Exit);
        assert_eq!(
            resolve_transition(&registry, Some("main"), "exit"),
            Transition::Exit
        );
    }

    #[test]
    fn test_unknown_value_is_forwarded_as_action() {
        let registry = registry();
        assert_eq!(
            resolve_transition(&registry, Some("main"), "update_dotfiles"),
            Transition::Action("update_dotfiles".to_string())
        );
    }

    #[test]
    fn test_loop_dispatches_actions_and_exits() {
        let registry = registry();
        let mut prompter =
            ScriptedPrompter::with_selections(&["files", "update_dotfiles", "back", "exit"]);
        let mut seen = Vec::new();

        run_menu_loop(&registry, "main", &mut (), &mut prompter, |action, _, _| {
            seen.push(action.to_string());
            Ok(())
        })
        .unwrap();

        assert_eq!(seen, vec!["update_dotfiles"]);
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_loop_survives_action_failure() {
        let registry = registry();
        let mut prompter = ScriptedPrompter::with_selections(&["files", "update_dotfiles", "exit"]);

        run_menu_loop(&registry, "main", &mut (), &mut prompter, |_, _, _| {
            anyhow::bail!("scan blew up")
        })
        .unwrap();
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_unregistered_root_ends_gracefully() {
        let registry = registry();
        let mut prompter = ScriptedPrompter::with_selections(&[]);
        run_menu_loop(&registry, "nope", &mut (), &mut prompter, |_, _, _| Ok(()))
            .unwrap();
    }

    #[test]
    fn test_dynamic_choices_reevaluated_every_visit() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut registry = MenuRegistry::new();
        registry.register(Menu {
            id: "main".to_string(),
            parent: None,
            name: "main".to_string(),
            message: "options:".to_string(),
            choices: Choices::Dynamic(Box::new(move |_: &()| {
                counter.set(counter.get() + 1);
                vec![Choice::new("noop", "noop"), Choice::new("exit", "exit")]
            })),
        });

        let mut prompter = ScriptedPrompter::with_selections(&["noop", "noop", "exit"]);
        run_menu_loop(&registry, "main", &mut (), &mut prompter, |_, _, _| Ok(()))
            .unwrap();

        // One evaluation per visit, including the final one.
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_empty_dynamic_menu_ascends() {
        let mut registry = MenuRegistry::new();
        registry.register(static_menu("main", None, &[("history", "history"), ("exit", "exit")]));
        registry.register(Menu {
            id: "history".to_string(),
            parent: Some("main".to_string()),
            name: "history".to_string(),
            message: "commits:".to_string(),
            choices: Choices::Dynamic(Box::new(|_: &()| Vec::new())),
        });

        let mut prompter = ScriptedPrompter::with_selections(&["history", "exit"]);
        run_menu_loop(&registry, "main", &mut (), &mut prompter, |_, _, _| Ok(()))
            .unwrap();
        assert!(prompter.is_exhausted());
    }
}

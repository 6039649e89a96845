use super::Choice;
use anyhow::{Context, Result, bail};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// The prompt shell the menu loop talks to. Blocks until the user answers.
pub trait Prompter {
    /// Presents `choices` under `message` and returns the chosen value.
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String>;

    /// Asks for a free-text line.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Waits for an acknowledgement before the next prompt.
    fn pause(&mut self);
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact()
            .context("selection prompt failed")?;
        Ok(choices[index].value.clone())
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .context("input prompt failed")?;
        Ok(text)
    }

    fn pause(&mut self) {
        let _ = Input::<String>::new()
            .with_prompt("...")
            .allow_empty(true)
            .interact_text();
    }
}

/// Scripted prompter for tests: answers come from pre-seeded queues instead
/// of a terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: std::collections::VecDeque<String>,
    inputs: std::collections::VecDeque<String>,
    /// Number of times `pause` was called.
    pub pauses: usize,
}

impl ScriptedPrompter {
    /// Creates a prompter that will answer `select` with `selections` in
    /// order.
    #[must_use]
    pub fn with_selections(selections: &[&str]) -> Self {
        Self {
            selections: selections.iter().map(ToString::to_string).collect(),
            inputs: std::collections::VecDeque::new(),
            pauses: 0,
        }
    }

    /// Queues an answer for the next `input` call.
    pub fn push_input(&mut self, text: &str) {
        self.inputs.push_back(text.to_string());
    }

    /// True once every scripted selection has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.selections.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _message: &str, choices: &[Choice]) -> Result<String> {
        let Some(value) = self.selections.pop_front() else {
            bail!("scripted prompter ran out of selections");
        };
        // A scripted answer must be one of the offered values, like a real
        // selection would be.
        if !choices.iter().any(|c| c.value == value) {
            bail!("scripted selection {value:?} is not among the offered choices");
        }
        Ok(value)
    }

    fn input(&mut self, _message: &str) -> Result<String> {
        self.inputs
            .pop_front()
            .context("scripted prompter ran out of inputs")
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

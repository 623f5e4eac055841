//! User interaction for mycli.

use crate::error::Result;
use dialoguer::Confirm;
use std::io::IsTerminal;

/// Trait for asking the user yes/no questions.
pub trait Prompter {
    /// Asks `question` and returns the answer, `default` when the user just
    /// presses enter.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer. Without an interactive stdin every
/// question is answered with its default.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            return Ok(default);
        }
        Ok(Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()?)
    }
}

/// Prompter with a fixed answer, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompter for FixedAnswer {
    fn confirm(&self, _question: &str, _default: bool) -> Result<bool> {
        Ok(self.0)
    }
}

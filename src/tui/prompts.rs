//! The interactive backend wiring the catalog to the prompt widgets.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::components::{MultiSelect, MultiSelectItem, Select, SelectItem};
use crate::catalog::{MultiSelectQuestion, SelectQuestion, TextQuestion};
use crate::response::Choice;
use crate::survey::PromptBackend;

/// Asks questions on a real terminal.
///
/// Free-text questions are inline on stdout/stdin, so they stay visible in
/// the scrollback; selection questions use the alternate-screen widgets.
#[derive(Debug, Default)]
pub struct TuiBackend;

impl TuiBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PromptBackend for TuiBackend {
    fn free_text(&mut self, question: &TextQuestion) -> Result<Option<String>> {
        text_prompt(question.prompt, question.default)
    }

    fn single_select<C: Choice>(&mut self, question: &SelectQuestion<C>) -> Result<Option<C>> {
        let items: Vec<SelectItem<C>> = C::ALL
            .iter()
            .map(|choice| SelectItem::new(*choice, choice.to_string()))
            .collect();
        let start = C::ALL
            .iter()
            .position(|choice| *choice == question.default)
            .unwrap_or(0);

        Select::new(question.prompt, items)
            .with_starting_cursor(start)
            .with_help_message("↑↓ navigate, Enter select, Esc abandons the survey")
            .prompt()
    }

    fn multi_select<C: Choice>(
        &mut self,
        question: &MultiSelectQuestion<C>,
    ) -> Result<Option<Vec<C>>> {
        let items: Vec<MultiSelectItem<C>> = C::ALL
            .iter()
            .map(|choice| {
                MultiSelectItem::new(*choice, choice.to_string())
                    .selected(question.defaults.contains(choice))
            })
            .collect();

        MultiSelect::new(question.prompt, items)
            .with_help_message("Space toggle (none is fine), Enter submit, Esc abandons the survey")
            .prompt()
    }
}

/// Inline free-text prompt.
///
/// Blank input accepts the default, which is shown in parentheses. EOF on
/// stdin counts as cancelling; an interrupt during the read falls to the
/// default signal disposition and kills the process before anything is
/// written.
fn text_prompt(title: &str, default: &str) -> Result<Option<String>> {
    print!(
        "{} {} ",
        title.cyan().bold(),
        format!("({default})").dimmed()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }

    let input = input.trim();
    if input.is_empty() {
        Ok(Some(default.to_string()))
    } else {
        Ok(Some(input.to_string()))
    }
}

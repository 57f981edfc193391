//! Multi-selection widget with toggle support.
//!
//! Submitting with nothing toggled is valid: the survey allows an empty
//! language list.

use std::collections::HashSet;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use super::PromptResult;
use crate::tui::{TerminalApp, theme::Theme};

/// An item in a multi-selection list.
#[derive(Debug, Clone)]
pub struct MultiSelectItem<T> {
    /// The value returned when this item is selected
    pub value: T,
    /// The label displayed to the user
    pub label: String,
    /// Whether this item starts out toggled on
    pub default_selected: bool,
}

impl<T> MultiSelectItem<T> {
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            default_selected: false,
        }
    }

    /// Sets whether this item is selected by default.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.default_selected = selected;
        self
    }
}

/// A multi-selection prompt with toggle support.
pub struct MultiSelect<'a, T> {
    title: &'a str,
    items: Vec<MultiSelectItem<T>>,
    help_message: Option<&'a str>,
    theme: Theme,
}

impl<'a, T> MultiSelect<'a, T> {
    #[must_use]
    pub fn new(title: &'a str, items: Vec<MultiSelectItem<T>>) -> Self {
        Self {
            title,
            items,
            help_message: None,
            theme: Theme::default(),
        }
    }

    /// Sets the help message displayed below the list.
    #[must_use]
    pub fn with_help_message(mut self, message: &'a str) -> Self {
        self.help_message = Some(message);
        self
    }

    /// Runs the multi-select prompt and returns the selected items' values,
    /// in list order.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(values))` - User submitted selections (possibly empty)
    /// - `Ok(None)` - User cancelled with Escape or Ctrl+C
    /// - `Err(_)` - Terminal error occurred
    pub fn prompt(self) -> PromptResult<Vec<T>> {
        if self.items.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let mut app = TerminalApp::new()?;
        let mut state = ListState::default();
        state.select(Some(0));

        let mut selected_indices: HashSet<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.default_selected)
            .map(|(idx, _)| idx)
            .collect();

        loop {
            app.terminal().draw(|frame| {
                self.render(frame, &mut state, &selected_indices);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.move_cursor_up(&mut state);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.move_cursor_down(&mut state);
                    }
                    KeyCode::Char(' ') => {
                        if let Some(idx) = state.selected() {
                            if selected_indices.contains(&idx) {
                                selected_indices.remove(&idx);
                            } else {
                                selected_indices.insert(idx);
                            }
                        }
                    }
                    KeyCode::Enter => {
                        let items = self.items;
                        let result: Vec<T> = items
                            .into_iter()
                            .enumerate()
                            .filter(|(idx, _)| selected_indices.contains(idx))
                            .map(|(_, item)| item.value)
                            .collect();
                        return Ok(Some(result));
                    }
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        for idx in 0..self.items.len() {
                            selected_indices.insert(idx);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn move_cursor_up(&self, state: &mut ListState) {
        let current = state.selected().unwrap_or(0);
        let new_idx = if current == 0 {
            self.items.len().saturating_sub(1)
        } else {
            current.saturating_sub(1)
        };
        state.select(Some(new_idx));
    }

    #[allow(clippy::arithmetic_side_effects)]
    fn move_cursor_down(&self, state: &mut ListState) {
        let current = state.selected().unwrap_or(0);
        state.select(Some((current + 1) % self.items.len()));
    }

    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn render(&self, frame: &mut Frame, state: &mut ListState, selected_indices: &HashSet<usize>) {
        // Cap list height to max 15 items visible so scrolling still works.
        let max_visible_items: u16 = 15;
        let list_height = (self.items.len() as u16).min(max_visible_items) + 4;
        let height = list_height.min(frame.area().height.saturating_sub(2));
        let area = centered_rect(60, height, frame.area());

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(Span::styled(self.title, self.theme.title));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner_area);

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_cursor = state.selected() == Some(idx);
                let is_selected = selected_indices.contains(&idx);

                let checkbox = if is_selected { "[x]" } else { "[ ]" };
                let cursor = if is_cursor { ">" } else { " " };

                let style = if is_cursor {
                    self.theme.selected
                } else {
                    self.theme.unselected
                };

                ListItem::new(Line::from(Span::styled(
                    format!("{cursor} {checkbox} {}", item.label),
                    style,
                )))
            })
            .collect();

        let list = List::new(list_items).scroll_padding(1);
        frame.render_stateful_widget(list, chunks.first().copied().unwrap_or(inner_area), state);

        let help_text = self
            .help_message
            .unwrap_or("↑↓ navigate, Space toggle, Enter submit, Esc cancel");
        let help_line = Line::from(Span::styled(help_text, self.theme.help));
        frame.render_widget(help_line, chunks.get(1).copied().unwrap_or(inner_area));
    }
}

#[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_help_message_replaces_the_generic_hint() {
        let items = vec![MultiSelectItem::new(1, "Python")];
        let multiselect = MultiSelect::new("Languages", items)
            .with_help_message("Enter submits even with nothing toggled");
        assert_eq!(
            multiselect.help_message,
            Some("Enter submits even with nothing toggled")
        );
    }

    #[test]
    fn test_selected_marks_the_item_as_a_default() {
        let item = MultiSelectItem::new(1, "Python").selected(true);
        assert!(item.default_selected);
    }
}

//! Theme configuration for consistent styling across the prompt widgets.

use ratatui::style::{Color, Modifier, Style};

// Survey palette: green accents matching the banner's styling.
const DS_GREEN: Color = Color::Rgb(34, 197, 94); // #22c55e
const DS_GREEN_DARK: Color = Color::Rgb(21, 128, 61); // #15803d
const DS_YELLOW: Color = Color::Rgb(234, 179, 8); // #eab308
const DS_GRAY: Color = Color::Rgb(156, 163, 175); // rgb(156 163 175)
const DS_GRAY_LIGHT: Color = Color::Rgb(209, 213, 219); // rgb(209 213 219)

/// Theme configuration for the prompt widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for titles and headers
    pub title: Style,
    /// Style for the item under the cursor
    pub selected: Style,
    /// Style for normal, unselected items
    pub unselected: Style,
    /// Style for help text at the bottom
    pub help: Style,
    /// Style for borders
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(DS_GREEN).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(DS_YELLOW).add_modifier(Modifier::BOLD),
            unselected: Style::default().fg(DS_GRAY_LIGHT),
            help: Style::default().fg(DS_GRAY),
            border: Style::default().fg(DS_GREEN_DARK),
        }
    }
}

//! Terminal prompt components built on ratatui.
//!
//! One widget per prompt kind the survey needs:
//! - inline free-text prompt (stdout/stdin, no alternate screen)
//! - `Select` - single selection from a list
//! - `MultiSelect` - multiple selection with toggle
//! - `Progress` - inline saving indicator

mod app;
pub mod components;
mod prompts;
mod theme;

pub use app::TerminalApp;
pub use components::{MultiSelectItem, Progress, ProgressHandle, PromptResult, SelectItem};
pub use prompts::TuiBackend;
pub use theme::Theme;

//! Reusable prompt widgets.

mod multiselect;
mod progress;
mod select;

pub use multiselect::{MultiSelect, MultiSelectItem};
pub use progress::{Progress, ProgressHandle};
pub use select::{Select, SelectItem};

use anyhow::Result;

/// Result type for prompt operations.
///
/// - `Ok(Some(value))` - User submitted a value
/// - `Ok(None)` - User cancelled (Escape or Ctrl+C)
/// - `Err(_)` - An error occurred
pub type PromptResult<T> = Result<Option<T>>;

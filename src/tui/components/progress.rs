//! Inline saving indicator.
//!
//! Prints directly to stdout; the alternate screen would hide the outcome
//! once the program exits.

use colored::Colorize;

/// Handle for resolving the indicator once the work behind it finishes.
pub struct ProgressHandle {
    _text: String,
}

impl ProgressHandle {
    /// Marks the step as completed.
    pub fn success(&self, message: impl Into<String>) {
        println!("{} {}", "✔".green(), message.into().green());
    }

    /// Marks the step as failed.
    pub fn fail(&self, error: impl Into<String>) {
        println!("{} {}", "✗".red(), error.into().red());
    }
}

/// A one-step progress display, in the spirit of a terminal spinner.
pub struct Progress {
    text: String,
}

impl Progress {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Prints the pending step and returns a handle for resolving it.
    #[must_use]
    pub fn start(self) -> ProgressHandle {
        println!("{} {}", "→".yellow(), self.text.yellow());
        ProgressHandle { _text: self.text }
    }
}

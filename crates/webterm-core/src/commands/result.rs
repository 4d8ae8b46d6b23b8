//! Command execution result type.

use crate::models::{OutputLine, ViewMode};

/// Result of executing a command.
///
/// Commands produce output and may ask the session to clear its log or to
/// switch views.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Truncate the output log (`clear`)
    pub clear: bool,
    /// View to switch to (e.g., `startx`)
    pub view: Option<ViewMode>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Default::default()
        }
    }

    /// Create a result that clears the log.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Default::default()
        }
    }

    /// Create a result that switches view, with optional output.
    pub fn switch_view(view: ViewMode, lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            view: Some(view),
            ..Default::default()
        }
    }

    /// Create an empty result (no output, no side effects).
    pub fn empty() -> Self {
        Self::default()
    }
}

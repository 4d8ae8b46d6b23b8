//! `nano` line editor state.
//!
//! The session is either prompting for commands or editing one file. While
//! editing, command lines are refused and only [`EditorCommand`]s and buffer
//! updates are accepted.

use crate::config::editor::{PLACEHOLDER_LINES, PLACEHOLDER_MARKER};
use crate::filesystem::path;

/// Control inputs recognized by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// Ctrl+S: write the buffer to the file, stay open
    Save,
    /// Ctrl+X: leave the editor
    Exit,
}

impl EditorCommand {
    /// Map a key press to a control input. Both require the Ctrl modifier.
    pub fn from_key(ctrl: bool, key: &str) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key {
            "s" | "S" => Some(Self::Save),
            "x" | "X" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An open editor bound to the file chosen at open time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Editor {
    dir: String,
    file_name: String,
    buffer: String,
    status: Option<String>,
}

impl Editor {
    /// Open an editor on `file_name` inside `dir` with the stored content.
    pub fn open(dir: impl Into<String>, file_name: impl Into<String>, content: &str) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            buffer: content.to_string(),
            status: None,
        }
    }

    /// Directory path the file lives in.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Display path of the edited file, e.g. `/home/notes.txt`.
    pub fn file_path(&self) -> String {
        format!("{}{}", self.dir, self.file_name)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with the text currently in the editor view.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Last status message (e.g. save confirmation).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Text to show in the editor view.
    ///
    /// An empty buffer shows the `~` placeholder, which never becomes content.
    pub fn display_text(&self) -> String {
        if self.buffer.is_empty() {
            Self::placeholder()
        } else {
            self.buffer.clone()
        }
    }

    /// Placeholder shown for an empty buffer.
    pub fn placeholder() -> String {
        format!("{PLACEHOLDER_MARKER}\n").repeat(PLACEHOLDER_LINES)
    }

    /// Title bar text.
    pub fn title(&self) -> String {
        format!("nano  {}", path::display(&self.file_path()))
    }
}

/// Current input mode of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ShellMode {
    /// Command lines are accepted and a prompt is shown
    #[default]
    Prompting,
    /// An editor is open; no prompt until it exits
    Editing(Editor),
}

impl ShellMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

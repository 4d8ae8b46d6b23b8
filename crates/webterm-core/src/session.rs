//! Interpreter session.
//!
//! A [`Session`] owns everything one user's shell needs: the virtual
//! filesystem, the current directory, the prompt/editor mode, the active view
//! and the output log. Front ends hold one session and drive it through
//! [`Session::submit`] and the editor methods; every call applies its changes
//! completely before returning.

use tracing::{debug, warn};

use crate::commands::{Command, CommandResult, execute_command};
use crate::config::{BANNER, ROOT_PATH, ShellConfig};
use crate::editor::{Editor, EditorCommand, ShellMode};
use crate::filesystem::{VirtualFs, path};
use crate::models::{OutputLine, ViewMode};
use crate::parser::parse_input;

/// State of the single live shell.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) fs: VirtualFs,
    /// Always an indexed path
    pub(crate) cwd: String,
    pub(crate) mode: ShellMode,
    view: ViewMode,
    log: Vec<OutputLine>,
    config: ShellConfig,
}

impl Session {
    /// Start a session on the startup tree, in `/`, with the banner logged.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            fs: VirtualFs::new(),
            cwd: ROOT_PATH.to_string(),
            mode: ShellMode::Prompting,
            view: ViewMode::Terminal,
            log: BANNER.lines().map(OutputLine::info).collect(),
            config,
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Current directory as an index path (`/home/`).
    pub fn current_dir(&self) -> &str {
        &self.cwd
    }

    /// Current directory as shown by `pwd` (`/home`).
    pub fn display_dir(&self) -> String {
        path::display(&self.cwd)
    }

    /// Prompt string without the trailing `$ `.
    ///
    /// Format: `{user}@{host}:{path}`
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}",
            self.config.user,
            self.config.host,
            self.display_dir()
        )
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// The open editor, if any.
    pub fn editor(&self) -> Option<&Editor> {
        match &self.mode {
            ShellMode::Editing(editor) => Some(editor),
            ShellMode::Prompting => None,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Output log, oldest line first.
    pub fn log(&self) -> &[OutputLine] {
        &self.log
    }

    /// Run one input line.
    ///
    /// The line is echoed into the log with the prompt, then the command's
    /// output is appended. Blank lines do nothing. Lines submitted while the
    /// editor is open are ignored.
    pub fn submit(&mut self, input: &str) -> CommandResult {
        if self.is_editing() {
            warn!(input, "command line refused while editor is open");
            return CommandResult::empty();
        }

        let Some(parsed) = parse_input(input) else {
            return CommandResult::empty();
        };

        let echo = OutputLine::command(self.prompt(), input.trim());
        let result = match Command::parse(&parsed.name, &parsed.args) {
            Ok(cmd) => execute_command(cmd, self),
            Err(e) => CommandResult::output(vec![OutputLine::error(e.to_string())]),
        };

        self.log.push(echo);
        if result.clear {
            self.log.clear();
        }
        if let Some(view) = result.view {
            self.view = view;
        }
        self.log.extend(result.output.iter().cloned());

        result
    }

    /// Replace the open editor's buffer. Ignored when no editor is open.
    pub fn editor_input(&mut self, text: &str) {
        if let ShellMode::Editing(editor) = &mut self.mode {
            editor.set_buffer(text);
        }
    }

    /// Apply an editor control input and return the lines it produced.
    pub fn editor_command(&mut self, command: EditorCommand) -> Vec<OutputLine> {
        let ShellMode::Editing(editor) = &mut self.mode else {
            warn!(?command, "editor command without an open editor");
            return Vec::new();
        };

        let lines = match command {
            EditorCommand::Save => {
                let saved = self
                    .fs
                    .write_file(editor.dir(), editor.file_name(), editor.buffer());
                let line = match saved {
                    Ok(()) => {
                        let message = format!("File '{}' saved", editor.file_name());
                        editor.set_status(message.clone());
                        OutputLine::success(message)
                    }
                    Err(e) => {
                        editor.set_status(e.to_string());
                        OutputLine::error(format!("nano: {e}"))
                    }
                };
                vec![line]
            }
            EditorCommand::Exit => {
                debug!(file = %editor.file_path(), "editor closed");
                self.mode = ShellMode::Prompting;
                Vec::new()
            }
        };

        self.log.extend(lines.iter().cloned());
        lines
    }

    /// Handle a key press while editing.
    ///
    /// Returns true when the key was a control input and has been applied.
    pub fn editor_key(&mut self, ctrl: bool, key: &str) -> bool {
        if !self.is_editing() {
            return false;
        }
        match EditorCommand::from_key(ctrl, key) {
            Some(command) => {
                self.editor_command(command);
                true
            }
            None => false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

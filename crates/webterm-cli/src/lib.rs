//! Line-oriented front end for a webterm session.
//!
//! Reads input lines from any [`BufRead`] and writes the transcript to any
//! [`Write`], so the same loop serves stdin/stdout and tests.
//!
//! While the editor is open, each input line is appended to the buffer. A
//! line holding `^S` (or the raw Ctrl+S byte) saves, `^X` (or Ctrl+X) exits.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use webterm_core::models::{OutputLine, ViewMode};
use webterm_core::{Editor, EditorCommand, Session, ShellConfig};

/// Escape sequence that clears a VT100-style screen.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Errors raised before the session starts.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Build the session config from an optional TOML file plus overrides.
pub fn load_config(
    path: Option<&Path>,
    user: Option<String>,
    host: Option<String>,
) -> Result<ShellConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| CliError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => ShellConfig::default(),
    };

    if let Some(user) = user {
        config.user = user;
    }
    if let Some(host) = host {
        config.host = host;
    }
    Ok(config)
}

/// Map an editor line to a control input.
fn editor_control(line: &str) -> Option<EditorCommand> {
    match line.trim() {
        "^S" | "^s" | "\u{13}" => Some(EditorCommand::Save),
        "^X" | "^x" | "\u{18}" => Some(EditorCommand::Exit),
        _ => None,
    }
}

/// Add one typed line to the editor buffer.
///
/// The first line replaces an empty buffer; every other line is joined with
/// `\n`, so blank lines are kept.
fn append_line(buffer: &str, line: &str, typed: bool) -> String {
    if typed || !buffer.is_empty() {
        format!("{buffer}\n{line}")
    } else {
        line.to_string()
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.plain())?;
    }
    Ok(())
}

fn write_editor<W: Write>(out: &mut W, editor: &Editor) -> io::Result<()> {
    writeln!(out, "{}", editor.title())?;
    write!(out, "{}", editor.display_text())?;
    if !editor.buffer().is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "^S Save  ^X Exit")
}

/// Run the REPL until input ends.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    write_lines(out, session.log())?;

    let mut lines = input.lines();
    // Whether the open editor has received a line yet.
    let mut typed = false;
    loop {
        if !session.is_editing() {
            write!(out, "{}$ ", session.prompt())?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        if session.is_editing() {
            match editor_control(&line) {
                Some(command) => {
                    let produced = session.editor_command(command);
                    write_lines(out, &produced)?;
                }
                None => {
                    let buffer = match session.editor() {
                        Some(editor) => append_line(editor.buffer(), &line, typed),
                        None => line,
                    };
                    typed = true;
                    session.editor_input(&buffer);
                }
            }
            continue;
        }

        let result = session.submit(&line);
        if result.clear {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write_lines(out, &result.output)?;

        if let Some(editor) = session.editor() {
            typed = false;
            write_editor(out, editor)?;
        }

        if result.view == Some(ViewMode::Desktop) {
            // No graphical desktop here: show the icons as text and stay in the terminal.
            info!("desktop requested from the line front end");
            writeln!(out, "Desktop: {}", session.list_home_directory().join("  "))?;
            session.set_view_mode(ViewMode::Terminal);
        }
    }

    writeln!(out)?;
    Ok(())
}

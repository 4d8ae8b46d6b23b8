//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against a session
//!
//! # Architecture
//!
//! A tokenized line is turned into a `Command` by `Command::parse`, which
//! also rejects unknown names and missing arguments. `execute_command` then
//! runs one handler per variant. Every error is converted to an output line
//! at that boundary.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use crate::error::ShellError;
use crate::filesystem::path;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `rmdir /var/tmp`).
///
/// Stored as typed; resolution against the current directory happens during
/// execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Absolute, normalized path of this argument seen from `base`.
    pub fn resolve(&self, base: &str) -> String {
        path::resolve(base, &self.0)
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List a directory, the current one by default
    Ls(Option<PathArg>),
    Cd(PathArg),
    /// One or more directory names, created independently
    Mkdir(Vec<String>),
    Rmdir(PathArg),
    Rm(String),
    Cat(String),
    Pwd,
    Nano(String),
    Clear,
    Help,
    Ifconfig,
    Top,
    /// Switch to the desktop view
    Startx,
}

impl Command {
    /// Parse command from name and arguments.
    ///
    /// Extra arguments beyond the ones a command uses are ignored.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, ShellError> {
        let first = args.first();
        let required = |usage: &'static str| first.cloned().ok_or(ShellError::InvalidUsage(usage));

        let cmd = match name {
            "ls" => Self::Ls(first.map(PathArg::new)),
            "cd" => Self::Cd(PathArg::new(required("cd <directory>")?)),
            "mkdir" => {
                if args.is_empty() {
                    return Err(ShellError::InvalidUsage("mkdir <name>..."));
                }
                Self::Mkdir(args.to_vec())
            }
            "rmdir" => Self::Rmdir(PathArg::new(required("rmdir <directory>")?)),
            "rm" => Self::Rm(required("rm <file>")?),
            "cat" => Self::Cat(required("cat <file>")?),
            "pwd" => Self::Pwd,
            "nano" => Self::Nano(required("nano <file>")?),
            "clear" => Self::Clear,
            "help" => Self::Help,
            "ifconfig" => Self::Ifconfig,
            "top" => Self::Top,
            "startx" => Self::Startx,
            _ => return Err(ShellError::CommandNotFound(name.to_string())),
        };

        Ok(cmd)
    }

    /// Name used to prefix error lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ls(_) => "ls",
            Self::Cd(_) => "cd",
            Self::Mkdir(_) => "mkdir",
            Self::Rmdir(_) => "rmdir",
            Self::Rm(_) => "rm",
            Self::Cat(_) => "cat",
            Self::Pwd => "pwd",
            Self::Nano(_) => "nano",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Ifconfig => "ifconfig",
            Self::Top => "top",
            Self::Startx => "startx",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

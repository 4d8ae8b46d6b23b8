//! Error types for the filesystem and the interpreter.
//!
//! - [`FsError`] - failures of virtual filesystem operations
//! - [`ShellError`] - failures while parsing or running a command line
//!
//! Neither type escapes command dispatch: handlers turn every error into a
//! single output line.

use thiserror::Error;

/// Virtual filesystem errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path, directory or file is absent
    #[error("{0}: No such file or directory")]
    NotFound(String),
    /// A sibling with the same name exists
    #[error("{0}: File exists")]
    AlreadyExists(String),
    /// Directory still has files or subdirectories
    #[error("{0}: Directory not empty")]
    NotEmpty(String),
    /// Name contains characters outside `[A-Za-z0-9_-]`
    #[error("{0}: Invalid name (use letters, numbers, '_' and '-')")]
    InvalidName(String),
    /// Root, or a directory the session is standing in
    #[error("{0}: Device or resource busy")]
    Busy(String),
}

/// Interpreter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error(transparent)]
    Fs(#[from] FsError),
    /// Required argument missing; carries the usage line
    #[error("usage: {0}")]
    InvalidUsage(&'static str),
    /// First token names no known command
    #[error("{0}: command not found. Type 'help' for available commands.")]
    CommandNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_messages() {
        assert_eq!(
            FsError::NotFound("docs".into()).to_string(),
            "docs: No such file or directory"
        );
        assert_eq!(
            FsError::NotEmpty("home".into()).to_string(),
            "home: Directory not empty"
        );
    }

    #[test]
    fn test_shell_error_wraps_fs_error() {
        let err: ShellError = FsError::AlreadyExists("a".into()).into();
        assert_eq!(err.to_string(), "a: File exists");
    }

    #[test]
    fn test_usage_message() {
        assert_eq!(
            ShellError::InvalidUsage("cd <directory>").to_string(),
            "usage: cd <directory>"
        );
    }
}

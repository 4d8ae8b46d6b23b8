//! Core of the browser shell: virtual filesystem, command interpreter and
//! `nano` editor state machine.
//!
//! This crate provides:
//! - [`VirtualFs`] path-indexed in-memory filesystem
//! - [`Session`] interpreter state, driven one input line at a time
//! - [`Command`] parsing and [`execute_command`] dispatch
//! - [`Editor`] and [`EditorCommand`] for the line editor
//!
//! It has no browser dependency; `webterm-web` and `webterm-cli` are thin
//! front ends over [`Session`].

mod commands;
pub mod config;
mod desktop;
mod editor;
pub mod error;
mod filesystem;
pub mod models;
mod parser;
mod session;

pub use commands::{Command, CommandResult, PathArg, execute_command};
pub use config::ShellConfig;
pub use editor::{Editor, EditorCommand, ShellMode};
pub use error::{FsError, ShellError};
pub use filesystem::{VirtualFs, path};
pub use parser::{ParsedCommand, parse_input};
pub use session::Session;

//! UI components built with Leptos.
//!
//! - [`Shell`] - Switches between the terminal and the desktop
//! - [`terminal`] - Output log, prompt input and the `nano` editor
//! - [`desktop`] - Folder icons, folder window and context menu
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod desktop;
pub mod icons;
mod shell;
pub mod terminal;

pub use shell::Shell;

//! Data models shared by the interpreter and its front ends.
//!
//! - [`File`], [`Directory`], [`Listing`] - virtual filesystem contents
//! - [`OutputLine`] - terminal output
//! - [`ViewMode`] - terminal or desktop view

mod filesystem;
mod terminal;
mod view;

pub use filesystem::{Directory, File, Listing};
pub use terminal::{OutputLine, OutputLineData};
pub use view::ViewMode;

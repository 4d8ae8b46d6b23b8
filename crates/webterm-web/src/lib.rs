//! Browser front end for webterm.
//!
//! - [`app`] - Root component and shared [`app::AppContext`]
//! - [`components`] - Terminal, editor and desktop views
//! - [`geometry`] - Desktop layout math
//! - [`logging`] - `tracing` to browser console bridge

pub mod app;
pub mod components;
pub mod config;
pub mod geometry;
pub mod logging;

pub use app::App;

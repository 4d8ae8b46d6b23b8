//! Shell configuration.
//!
//! Centralizes the constants used by the filesystem, interpreter and editor.
//! Text assets are loaded at compile time using `include_str!`.

use serde::Deserialize;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Greeting shown when a session starts.
pub const BANNER: &str = include_str!("../assets/text/banner.txt");

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Interface listing for `ifconfig` command.
pub const IFCONFIG_TEXT: &str = include_str!("../assets/text/ifconfig.txt");

/// Process table for `top` command.
pub const TOP_TEXT: &str = include_str!("../assets/text/top.txt");

// =============================================================================
// Prompt
// =============================================================================

/// Default user name shown in the prompt.
pub const DEFAULT_USER: &str = "user";

/// Default host name shown in the prompt.
pub const DEFAULT_HOST: &str = "local.lg";

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Root path of the index.
pub const ROOT_PATH: &str = "/";

/// Directories created under `/` when a session starts, in listing order.
pub const ROOT_DIRECTORIES: &[&str] = &["bin", "home", "var"];

/// Directory mirrored by the desktop view.
pub const HOME_PATH: &str = "/home/";

/// Pattern every directory name must match.
pub const DIRECTORY_NAME_PATTERN: &str = "^[A-Za-z0-9_-]+$";

// =============================================================================
// Editor
// =============================================================================

/// Editor configuration.
pub mod editor {
    /// Number of placeholder lines shown for an empty buffer.
    pub const PLACEHOLDER_LINES: usize = 20;
    /// Marker drawn on each placeholder line.
    pub const PLACEHOLDER_MARKER: &str = "~";
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Per-session settings that front ends may override.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// User name in the prompt.
    pub user: String,
    /// Host name in the prompt.
    pub host: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

//! Browser front end configuration.
//!
//! Shell constants (prompt, startup tree, text assets) live in
//! `webterm_core::config`; this module only holds view settings.

// =============================================================================
// Terminal
// =============================================================================

/// Maximum number of command lines kept for up/down navigation.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Delay before focusing the editor textarea, so it runs after the view swap.
pub const EDITOR_FOCUS_DELAY_MS: u32 = 50;

// =============================================================================
// Desktop Geometry (pixels)
// =============================================================================

/// Used when the browser window size cannot be read.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 800.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 600.0;

/// Bounding box of a desktop folder icon with its label.
pub const ICON_WIDTH: f64 = 100.0;
pub const ICON_HEIGHT: f64 = 100.0;

pub const WINDOW_MIN_WIDTH: f64 = 200.0;
pub const WINDOW_MIN_HEIGHT: f64 = 150.0;
pub const WINDOW_MAX_WIDTH: f64 = 500.0;
pub const WINDOW_MAX_HEIGHT: f64 = 400.0;

/// Size and position of a freshly opened folder window.
pub const WINDOW_DEFAULT_WIDTH: f64 = 320.0;
pub const WINDOW_DEFAULT_HEIGHT: f64 = 240.0;
pub const WINDOW_DEFAULT_X: f64 = 120.0;
pub const WINDOW_DEFAULT_Y: f64 = 80.0;

/// Name proposed when creating a folder from the context menu.
pub const NEW_FOLDER_DEFAULT_NAME: &str = "New_Folder";

// =============================================================================
// Icon Theme
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

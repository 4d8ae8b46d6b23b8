//! View management types.

/// Main view mode (Terminal or Desktop).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Command-line view (default)
    #[default]
    Terminal,
    /// Desktop with folder icons
    Desktop,
}

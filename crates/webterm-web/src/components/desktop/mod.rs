//! Desktop view: folder icons for `/home/`, a single folder window and a
//! right-click menu for creating folders.

mod context_menu;
mod desktop;
mod folder_icon;
mod state;
mod window;

pub use context_menu::ContextMenu;
pub use desktop::Desktop;
pub use folder_icon::FolderIcon;
pub use state::{DesktopIcon, DesktopState, DragTarget};
pub use window::FolderWindow;

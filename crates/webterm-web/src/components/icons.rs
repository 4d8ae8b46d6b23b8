//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{
        LuFile as File, LuFolder as Folder, LuFolderPlus as NewFolder, LuTerminal as Terminal,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsFileEarmark as File, BsFolderFill as Folder, BsFolderPlus as NewFolder,
        BsTerminal as Terminal, BsXLg as Close,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(FILE, File);
themed_icon!(TERMINAL, Terminal);
themed_icon!(CLOSE, Close);

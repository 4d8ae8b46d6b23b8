mod editor;
mod input;
mod output;
mod terminal;

pub use editor::Editor;
pub use input::Input;
pub use output::Output;
pub use terminal::Terminal;

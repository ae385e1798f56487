//! File menu commands.
//!
//! ## Learning: Enums over String Dispatch
//!
//! Each menu entry is a variant, and the UI routes it with a `match`. Adding a
//! variant without a handler is a compile error instead of a silently
//! ignored menu item.

/// Commands offered by the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    New,
    Open,
    Save,
    Exit,
}

impl MenuCommand {
    /// Menu order.
    pub const ALL: [MenuCommand; 4] = [
        MenuCommand::New,
        MenuCommand::Open,
        MenuCommand::Save,
        MenuCommand::Exit,
    ];

    /// Returns the command's menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::New => "New",
            MenuCommand::Open => "Open",
            MenuCommand::Save => "Save",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Returns the keyboard shortcut shown next to the label.
    pub fn shortcut(&self) -> &'static str {
        match self {
            MenuCommand::New => "Ctrl+N",
            MenuCommand::Open => "Ctrl+O",
            MenuCommand::Save => "Ctrl+S",
            MenuCommand::Exit => "Ctrl+Q",
        }
    }

    /// Maps a Ctrl+<key> character to its command.
    pub fn from_shortcut_key(key: &str) -> Option<Self> {
        match key {
            "n" => Some(MenuCommand::New),
            "o" => Some(MenuCommand::Open),
            "s" => Some(MenuCommand::Save),
            "q" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

use iced::keyboard;
use iced::widget::text_editor;
use std::path::PathBuf;

use stylepad_core::{FontSize, MenuCommand, Rgb};

use crate::app::types::Channel;

#[derive(Debug, Clone)]
pub enum Message {
    // File menu
    Menu(MenuCommand),
    ToggleFileMenu,
    CloseFileMenu,

    // Editor
    EditorAction(text_editor::Action),

    // Style bar
    FontSelected(&'static str),
    SizeSelected(FontSize),

    // Color prompt
    ShowColorPicker,
    ColorChannelChanged(Channel, u8),
    ColorPresetPicked(Rgb),
    ColorConfirm,
    ColorCancel,

    // Error notification
    DismissNotice,

    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Dialog results
    OpenPathChosen(Option<PathBuf>),
    SavePathChosen(Option<PathBuf>),
}

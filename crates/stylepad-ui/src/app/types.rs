use iced::widget::text_editor::{self, Action, Edit, Motion};
use std::path::PathBuf;
use std::sync::Arc;

use stylepad_core::{Buffer, Config, Rgb};

/// Launch options from the command line and config file.
#[derive(Debug, Default)]
pub struct Flags {
    pub file: Option<PathBuf>,
    pub config: Config,
}

/// The iced text content, seen by the core as a document buffer.
pub struct Surface(text_editor::Content);

impl Surface {
    pub fn new() -> Self {
        Self(text_editor::Content::new())
    }

    pub fn content(&self) -> &text_editor::Content {
        &self.0
    }

    pub fn perform(&mut self, action: text_editor::Action) {
        self.0.perform(action);
    }

    /// Zero-based cursor line and column.
    pub fn cursor_position(&self) -> (usize, usize) {
        self.0.cursor_position()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer for Surface {
    // `Content::text` always ends in a newline; join the lines instead so a
    // saved file holds exactly what was loaded or typed.
    fn text(&self) -> String {
        (0..self.0.line_count())
            .filter_map(|i| self.0.line(i))
            .map(|l| {
                let s: &str = &l;
                s.to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn replace(&mut self, text: &str) {
        self.0 = text_editor::Content::with_text(text);

        // `with_text` drops the empty line after a trailing newline.
        if text.ends_with('\n') {
            self.0.perform(Action::Move(Motion::DocumentEnd));
            self.0
                .perform(Action::Edit(Edit::Paste(Arc::new("\n".to_string()))));
            self.0.perform(Action::Move(Motion::DocumentStart));
        }
    }
}

/// One channel of an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// Color prompt state. Only confirming it touches the editor's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDraft {
    pub color: Rgb,
}

impl ColorDraft {
    pub fn new(initial: Rgb) -> Self {
        Self { color: initial }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.color.r,
            Channel::Green => self.color.g,
            Channel::Blue => self.color.b,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.color.r = value,
            Channel::Green => self.color.g = value,
            Channel::Blue => self.color.b = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylepad_core::{Editor, SaveOutcome, Style};

    #[test]
    fn test_color_draft_channels() {
        let mut draft = ColorDraft::new(Rgb::BLACK);
        draft.set(Channel::Red, 200);
        draft.set(Channel::Blue, 17);

        assert_eq!(draft.color, Rgb::new(200, 0, 17));
        assert_eq!(draft.get(Channel::Red), 200);
        assert_eq!(draft.get(Channel::Green), 0);
    }

    #[test]
    fn test_surface_text_is_exact() {
        let mut surface = Surface::new();
        assert_eq!(Buffer::text(&surface), "");

        for text in ["hello", "hello\n", "\n", "a\n\n", "a\nb\n\nc", "\n\n", ""] {
            surface.replace(text);
            assert_eq!(Buffer::text(&surface), text);
            assert_eq!(surface.cursor_position(), (0, 0));
        }
    }

    #[test]
    fn test_surface_save_open_keeps_trailing_newlines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");

        for text in ["hello\n", "line one\nline two\n\n", "\n", "no newline"] {
            std::fs::write(&path, text).unwrap();

            let mut editor = Editor::new(Surface::new(), Style::default());
            assert!(editor.open(Some(path.clone())));
            assert_eq!(Buffer::text(editor.document().buffer()), text);

            // Open then Save writes back exactly what was read.
            assert_eq!(editor.save(), SaveOutcome::Saved);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), text);

            editor.new_file();
            assert!(editor.open(Some(path.clone())));
            assert_eq!(Buffer::text(editor.document().buffer()), text);
        }
    }
}

//! Command handlers for the editor window.
//!
//! ## Learning: Prompts as Values
//!
//! File and color prompts belong to the UI, and in the UI they are
//! asynchronous. The handlers here take the prompt's *result* instead:
//! `Some(choice)` when the user confirmed, `None` when they cancelled.
//! Cancellation is ordinary control flow and never mutates state.

use std::path::PathBuf;

use crate::buffer::Buffer;
use crate::document::Document;
use crate::style::{FontSize, Rgb, Style};
use crate::FileError;

/// A user-visible error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
}

impl From<&FileError> for Notice {
    fn from(err: &FileError) -> Self {
        Self {
            title: "Error",
            message: err.notice(),
        }
    }
}

/// What a save request led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer was written and the file is bound.
    Saved,
    /// No file is bound yet; the caller must ask for a destination.
    NeedsDestination,
    /// The destination prompt was cancelled.
    Cancelled,
    /// The write failed and a notice was raised.
    Failed,
}

/// State owned by the editor window.
#[derive(Debug)]
pub struct Editor<B> {
    document: Document<B>,
    style: Style,
    notices: Vec<Notice>,
}

impl<B: Buffer> Editor<B> {
    /// Creates an editor with an empty, untitled document.
    pub fn new(buffer: B, style: Style) -> Self {
        Self {
            document: Document::new(buffer),
            style,
            notices: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document<B> {
        &self.document
    }

    /// Mutable access to the buffer for text input from the widget.
    pub fn buffer_mut(&mut self) -> &mut B {
        self.document.buffer_mut()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    // ==================== File Commands ====================

    /// Empties the buffer and forgets the current file.
    pub fn new_file(&mut self) {
        self.document.clear();
        tracing::debug!("New document");
    }

    /// Handles the result of the open prompt.
    ///
    /// Returns true if a file was loaded.
    pub fn open(&mut self, choice: Option<PathBuf>) -> bool {
        let Some(path) = choice else {
            return false;
        };

        match self.document.open(&path) {
            Ok(()) => {
                tracing::info!("Opened {}", path.display());
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Saves to the current file, if there is one.
    pub fn save(&mut self) -> SaveOutcome {
        match self.document.path().map(|p| p.to_path_buf()) {
            Some(path) => self.write_to(path),
            None => SaveOutcome::NeedsDestination,
        }
    }

    /// Handles the result of the destination prompt.
    pub fn save_to(&mut self, choice: Option<PathBuf>) -> SaveOutcome {
        match choice {
            Some(path) => self.write_to(path),
            None => SaveOutcome::Cancelled,
        }
    }

    fn write_to(&mut self, path: PathBuf) -> SaveOutcome {
        match self.document.save_as(&path) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                SaveOutcome::Saved
            }
            Err(err) => {
                self.report(&err);
                SaveOutcome::Failed
            }
        }
    }

    // ==================== Styling ====================

    pub fn set_family(&mut self, family: impl Into<String>) {
        self.style.family = family.into();
        tracing::debug!("Style is now {}", self.style.descriptor());
    }

    pub fn set_size(&mut self, size: FontSize) {
        self.style.size = size;
        tracing::debug!("Style is now {}", self.style.descriptor());
    }

    /// Handles the result of the color prompt.
    pub fn pick_color(&mut self, choice: Option<Rgb>) {
        if let Some(color) = choice {
            self.style.color = Some(color);
            tracing::debug!("Text color is now {}", color.hex());
        }
    }

    // ==================== Notices ====================

    fn report(&mut self, err: &FileError) {
        tracing::warn!(path = %err.path().display(), "{}", err);
        self.notices.push(Notice::from(err));
    }

    /// Notices waiting for acknowledgement, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Acknowledges the oldest notice.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        if self.notices.is_empty() {
            None
        } else {
            Some(self.notices.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn editor() -> Editor<String> {
        Editor::new(String::new(), Style::default())
    }

    fn type_text(editor: &mut Editor<String>, text: &str) {
        editor.buffer_mut().push_str(text);
    }

    #[test]
    fn test_cancelled_save_changes_nothing() {
        let mut ed = editor();
        assert_eq!(ed.save(), SaveOutcome::NeedsDestination);
        assert_eq!(ed.save_to(None), SaveOutcome::Cancelled);

        assert!(ed.document().buffer().is_empty());
        assert!(ed.document().path().is_none());
        assert!(ed.notices().is_empty());
    }

    #[test]
    fn test_save_then_open_scenario() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");

        let mut ed = editor();
        type_text(&mut ed, "hello");
        assert_eq!(ed.save(), SaveOutcome::NeedsDestination);
        assert_eq!(ed.save_to(Some(path.clone())), SaveOutcome::Saved);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(ed.document().path(), Some(path.as_path()));
        assert!(ed.title().contains("a.txt"));

        // A second save goes straight to the bound file.
        type_text(&mut ed, " world");
        assert_eq!(ed.save(), SaveOutcome::Saved);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello world");
    }

    #[test]
    fn test_new_always_resets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "content").unwrap();

        let mut ed = editor();
        assert!(ed.open(Some(path)));
        type_text(&mut ed, " more");

        ed.new_file();
        assert!(ed.document().buffer().is_empty());
        assert!(ed.document().path().is_none());
        assert_eq!(ed.title(), "Stylepad - Untitled");

        ed.new_file();
        assert!(ed.document().buffer().is_empty());
    }

    #[test]
    fn test_open_missing_file_raises_one_notice() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("kept.txt");
        std::fs::write(&existing, "kept").unwrap();

        let mut ed = editor();
        assert!(ed.open(Some(existing.clone())));
        let title = ed.title();

        assert!(!ed.open(Some(dir.path().join("missing.txt"))));

        assert_eq!(ed.document().buffer(), "kept");
        assert_eq!(ed.document().path(), Some(existing.as_path()));
        assert_eq!(ed.title(), title);
        assert_eq!(
            ed.notices(),
            [Notice {
                title: "Error",
                message: "Failed to open file"
            }]
        );
    }

    #[test]
    fn test_cancelled_open_changes_nothing() {
        let mut ed = editor();
        type_text(&mut ed, "draft");
        assert!(!ed.open(None));
        assert_eq!(ed.document().buffer(), "draft");
        assert!(ed.notices().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_binding() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        type_text(&mut ed, "text");

        // A directory is never a writable file destination.
        assert_eq!(ed.save_to(Some(dir.path().to_path_buf())), SaveOutcome::Failed);
        assert!(ed.document().path().is_none());
        assert_eq!(ed.notices().len(), 1);
        assert_eq!(ed.notices()[0].message, "Failed to save file");

        let bad_parent = dir.path().join("no-such-dir").join("out.txt");
        let good = dir.path().join("good.txt");
        assert_eq!(ed.save_to(Some(good.clone())), SaveOutcome::Saved);
        assert_eq!(ed.save_to(Some(bad_parent)), SaveOutcome::Failed);
        assert_eq!(ed.document().path(), Some(good.as_path()));
        assert_eq!(ed.notices().len(), 2);
    }

    #[test]
    fn test_dismiss_notices_in_order() {
        let dir = TempDir::new().unwrap();
        let mut ed = editor();
        ed.open(Some(dir.path().join("x")));
        ed.save_to(Some(dir.path().to_path_buf()));

        assert_eq!(ed.dismiss_notice().unwrap().message, "Failed to open file");
        assert_eq!(ed.dismiss_notice().unwrap().message, "Failed to save file");
        assert!(ed.dismiss_notice().is_none());
    }

    #[test]
    fn test_size_change_keeps_family_and_color() {
        let mut ed = editor();
        ed.set_family("DejaVu Sans");
        ed.pick_color(Some(Rgb::new(10, 20, 30)));

        for size in FontSize::ALL {
            ed.set_size(size);
            assert_eq!(ed.style().size, size);
            assert_eq!(ed.style().family, "DejaVu Sans");
            assert_eq!(ed.style().color, Some(Rgb::new(10, 20, 30)));
        }
    }

    #[test]
    fn test_cancelled_color_keeps_current() {
        let mut ed = editor();
        ed.pick_color(None);
        assert_eq!(ed.style().color, None);

        ed.pick_color(Some(Rgb::new(200, 40, 40)));
        ed.pick_color(None);
        assert_eq!(ed.style().color, Some(Rgb::new(200, 40, 40)));
    }

    proptest! {
        #[test]
        fn prop_save_open_identity(text in "\\PC*") {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("roundtrip.txt");

            let mut ed = editor();
            type_text(&mut ed, &text);
            prop_assert_eq!(ed.save_to(Some(path.clone())), SaveOutcome::Saved);

            ed.new_file();
            prop_assert!(ed.open(Some(path)));
            prop_assert_eq!(ed.document().buffer(), &text);
        }
    }
}

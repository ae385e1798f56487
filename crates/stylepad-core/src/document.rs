//! The document: one buffer bound to at most one file.
//!
//! ## Learning: Transactional Updates
//!
//! `open` reads into a temporary `String` first and only touches the buffer
//! and path once the read has succeeded. A failed open therefore cannot leave
//! the document half-replaced.

use std::path::{Path, PathBuf};

use crate::buffer::Buffer;
use crate::{APP_NAME, FileError, FileResult};

/// A single document being edited.
#[derive(Debug)]
pub struct Document<B> {
    /// The text being edited
    buffer: B,

    /// File the buffer was last loaded from or saved to
    path: Option<PathBuf>,
}

impl<B: Buffer> Document<B> {
    /// Wraps a buffer as a new, unbound document.
    pub fn new(mut buffer: B) -> Self {
        buffer.replace("");
        Self { buffer, path: None }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    /// Returns the current file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for display.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Window title derived from the current file.
    pub fn title(&self) -> String {
        match self.file_name() {
            Some(name) => format!("{} - {}", APP_NAME, name),
            None => format!("{} - Untitled", APP_NAME),
        }
    }

    /// Empties the buffer and unbinds the file.
    pub fn clear(&mut self) {
        self.buffer.replace("");
        self.path = None;
    }

    /// Loads `path` into the buffer and binds it.
    ///
    /// On failure nothing changes.
    pub fn open(&mut self, path: impl AsRef<Path>) -> FileResult<()> {
        let path = path.as_ref();
        let text = read_text(path)?;
        self.buffer.replace(&text);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Writes the buffer to `path` and binds it.
    ///
    /// On failure the binding is left as it was.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> FileResult<()> {
        let path = path.as_ref();
        write_text(path, &self.buffer.text())?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> FileResult<String> {
    std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `text` to `path`, creating or truncating it.
pub fn write_text(path: &Path, text: &str) -> FileResult<()> {
    std::fs::write(path, text).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

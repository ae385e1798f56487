//! # Stylepad Core
//!
//! Toolkit-free editor state: the document buffer, the file it is bound to,
//! and the global text style.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    Editor                     │
//! │  ┌──────────────────────┐  ┌───────────────┐ │
//! │  │       Document       │  │     Style     │ │
//! │  │  buffer + file path  │  │ family / size │ │
//! │  └──────────────────────┘  │    / color    │ │
//! │                            └───────────────┘ │
//! │  pending notices (failed open / save)         │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The UI crate owns exactly one `Editor` and drives it from menu commands,
//! dialog results and selector changes. Nothing in here knows about widgets,
//! so the whole command flow is tested against a plain `String` buffer.
//!
//! ## Learning: Generic Ownership
//!
//! `Editor<B>` is generic over its [`Buffer`]. The UI plugs in the toolkit's
//! text content, the tests plug in `String`, and the handlers stay the same.

pub mod buffer;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod fonts;
pub mod style;

pub use buffer::Buffer;
pub use command::MenuCommand;
pub use config::{Config, ConfigError};
pub use document::Document;
pub use editor::{Editor, Notice, SaveOutcome};
pub use fonts::FontCatalog;
pub use style::{FontSize, Rgb, Style, StyleDescriptor};

use std::path::PathBuf;

/// Application name used in window titles and the config directory.
pub const APP_NAME: &str = "Stylepad";

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// The two failure kinds the editor recognizes.
///
/// Both carry the path and the underlying I/O error for the log; the user
/// only ever sees [`FileError::notice`].
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Generic, user-facing message for this failure.
    pub fn notice(&self) -> &'static str {
        match self {
            FileError::Read { .. } => "Failed to open file",
            FileError::Write { .. } => "Failed to save file",
        }
    }

    /// Path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_notice_is_generic() {
        let err = FileError::Read {
            path: PathBuf::from("/nope/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.notice(), "Failed to open file");
        assert!(err.to_string().contains("missing.txt"));

        let err = FileError::Write {
            path: PathBuf::from("/ro/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.notice(), "Failed to save file");
        assert_eq!(err.path(), std::path::Path::new("/ro/out.txt"));
    }
}

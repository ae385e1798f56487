//! # Stylepad UI
//!
//! Desktop window for the editor, built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App`, which owns the core `Editor`
//! - **Message**: menu commands, selector changes, dialog results
//! - **Update**: one handler per message, run to completion on the UI thread
//! - **View**: menu bar, style bar, text surface, status line and modals
//!
//! File prompts are native dialogs (`rfd`) awaited as iced tasks; their
//! result comes back as a message, and the actual read or write happens
//! synchronously in that message's handler.

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};

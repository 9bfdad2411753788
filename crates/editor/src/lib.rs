//! Editor core for quill, a plain-text editor with a built-in typing trainer.
//!
//! Everything here is frontend-agnostic: the terminal frontend renders an
//! [`Editor`] and forwards input to it.

pub mod clipboard;
pub mod command;
pub mod dialog;
pub mod document;
mod editor;
pub mod error;
pub mod menu;
pub mod print;
pub mod search;
pub mod settings;
pub mod statistics;
pub mod status;
pub mod theme;
pub mod training;
pub mod undo_store;
pub mod wiki;

pub use clipboard::Clipboard;
pub use command::{Command, Keymap};
pub use dialog::Dialog;
pub use document::Document;
pub use editor::{Editor, Effect, fetch_wikipedia};
pub use error::{EditorError, Result};
pub use settings::Settings;
pub use theme::Theme;
pub use wiki::WikipediaClient;

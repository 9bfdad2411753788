//! Core types for text editing: ranges, grapheme-aware movement and word counting.

/// Grapheme cluster boundary detection.
pub mod graphemes;
/// Cursor and selection movement over a rope.
pub mod movement;
/// Text range types measured in characters.
pub mod range;
/// Plain-text helpers shared by the editor and trainer.
pub mod text;

pub use range::{CharIdx, CharLen, Range};
pub use ropey::{Rope, RopeSlice};
pub use text::{normalize_to_lf, word_count};

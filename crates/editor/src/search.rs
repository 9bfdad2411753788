//! Literal find and replace over a [`Document`].
//!
//! Searching starts at the selection anchor. A hit is selected with the anchor
//! on the match end and the head on the match start, so the next search
//! resumes after the previous hit.

use quill_primitives::Range;
use tracing::debug;

use crate::document::Document;

/// Finds the next literal, case-sensitive occurrence of `needle` at or after
/// the selection anchor. Returns the match extent without touching the document.
pub fn find_from_anchor(doc: &Document, needle: &str) -> Option<Range> {
	let rope = doc.rope();
	let start_char = doc.selection().anchor.min(rope.len_chars());
	let start_byte = rope.char_to_byte(start_char);
	let text = doc.text();
	let offset = text[start_byte..].find(needle)?;
	let from = rope.byte_to_char(start_byte + offset);
	let to = from + needle.chars().count();
	Some(Range::new(from, to))
}

/// Selects the next occurrence of `needle`. Returns whether it was found.
pub fn find_next(doc: &mut Document, needle: &str) -> bool {
	match find_from_anchor(doc, needle) {
		Some(hit) => {
			debug!(needle, from = hit.from(), "find hit");
			doc.set_selection(Range::new(hit.to(), hit.from()));
			true
		}
		None => false,
	}
}

/// Replaces the next occurrence of `needle` with `replacement`.
/// Returns whether a match was found and replaced.
pub fn replace_next(doc: &mut Document, needle: &str, replacement: &str) -> bool {
	if !find_next(doc, needle) {
		return false;
	}
	doc.insert_text(replacement);
	true
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finds_from_cursor_and_selects_match() {
		let mut doc = Document::new("one two one two", None);
		assert!(find_next(&mut doc, "two"));
		assert_eq!(doc.selected_text().as_deref(), Some("two"));
		assert_eq!(doc.selection(), Range::new(7, 4));
	}

	#[test]
	fn repeated_find_advances() {
		let mut doc = Document::new("one two one two", None);
		assert!(find_next(&mut doc, "two"));
		assert!(find_next(&mut doc, "two"));
		assert_eq!(doc.selection(), Range::new(15, 12));
		assert!(!find_next(&mut doc, "two"));
	}

	#[test]
	fn search_is_case_sensitive() {
		let mut doc = Document::new("Hello hello", None);
		assert!(find_next(&mut doc, "hello"));
		assert_eq!(doc.selection().from(), 6);
	}

	#[test]
	fn miss_leaves_selection_alone() {
		let mut doc = Document::new("abc", None);
		doc.set_selection(Range::point(1));
		assert!(!find_next(&mut doc, "zzz"));
		assert_eq!(doc.selection(), Range::point(1));
	}

	#[test]
	fn replace_next_swaps_text() {
		let mut doc = Document::new("cat and cat", None);
		assert!(replace_next(&mut doc, "cat", "dog"));
		assert_eq!(doc.text(), "dog and cat");
		assert!(replace_next(&mut doc, "cat", "dog"));
		assert_eq!(doc.text(), "dog and dog");
		assert!(!replace_next(&mut doc, "cat", "dog"));
	}

	#[test]
	fn handles_multibyte_text() {
		let mut doc = Document::new("ünï cödé ünï", None);
		doc.set_selection(Range::point(1));
		assert!(find_next(&mut doc, "ünï"));
		assert_eq!(doc.selection().from(), 9);
	}

	#[test]
	fn empty_needle_matches_at_anchor() {
		let mut doc = Document::new("abc", None);
		doc.set_selection(Range::point(2));
		assert!(find_next(&mut doc, ""));
		assert!(doc.selection().is_empty());
		assert_eq!(doc.cursor(), 2);
	}
}

//! Cursor and selection movement primitives.
//!
//! Every motion takes an `extend` flag: when set the anchor stays put and only
//! the head moves, otherwise the range collapses to the new head.

#[cfg(test)]
mod tests;

use ropey::RopeSlice;

use crate::graphemes::{next_grapheme_boundary, prev_grapheme_boundary};
use crate::range::{CharIdx, Range};

/// Horizontal direction of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
	Left,
	Right,
}

/// Vertical direction of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
	Up,
	Down,
}

/// Creates a range for cursor movement.
///
/// If `extend` is false, collapses to a point at `new_head`.
/// If `extend` is true, keeps anchor fixed, moves head to `new_head`.
#[inline]
pub fn make_range(range: Range, new_head: CharIdx, extend: bool) -> Range {
	if extend {
		Range::new(range.anchor, new_head)
	} else {
		Range::point(new_head)
	}
}

/// Returns the char index one past the last visible character of `line`.
///
/// Trailing line terminators are excluded, so the result is where a cursor
/// lands when pressing End.
pub fn line_end_char(text: RopeSlice, line: usize) -> CharIdx {
	let start = text.line_to_char(line);
	let slice = text.line(line);
	let mut len = slice.len_chars();
	if len > 0 && slice.char(len - 1) == '\n' {
		len -= 1;
		if len > 0 && slice.char(len - 1) == '\r' {
			len -= 1;
		}
	}
	start + len
}

/// Moves the head left or right by `count` grapheme clusters.
///
/// Without `extend`, a non-empty selection first collapses to the side the
/// motion points at, which counts as one step.
pub fn move_horizontally(text: RopeSlice, range: Range, dir: Horizontal, count: usize, extend: bool) -> Range {
	if !extend && !range.is_empty() {
		let edge = match dir {
			Horizontal::Left => range.from(),
			Horizontal::Right => range.to(),
		};
		return Range::point(edge);
	}

	let mut head = range.head.min(text.len_chars());
	for _ in 0..count {
		head = match dir {
			Horizontal::Left => prev_grapheme_boundary(text, head),
			Horizontal::Right => next_grapheme_boundary(text, head),
		};
	}
	make_range(range, head, extend)
}

/// Moves the head up or down by `count` lines.
///
/// `goal_col` is the column the cursor should try to reach; pass the value
/// returned by the previous vertical motion so that passing through short
/// lines does not lose the column. Returns the new range and the goal column.
pub fn move_vertically(
	text: RopeSlice,
	range: Range,
	dir: Vertical,
	count: usize,
	extend: bool,
	goal_col: Option<usize>,
) -> (Range, usize) {
	let head = range.head.min(text.len_chars());
	let line = text.char_to_line(head);
	let col = goal_col.unwrap_or(head - text.line_to_char(line));
	let last_line = text.len_lines().saturating_sub(1);

	let target = match dir {
		Vertical::Up => line.saturating_sub(count),
		Vertical::Down => (line + count).min(last_line),
	};

	if target == line {
		let edge = match dir {
			Vertical::Up if line == 0 => 0,
			Vertical::Down if line == last_line => text.len_chars(),
			_ => head,
		};
		return (make_range(range, edge, extend), col);
	}

	let start = text.line_to_char(target);
	let new_head = (start + col).min(line_end_char(text, target));
	(make_range(range, new_head, extend), col)
}

/// Moves the head to the first character of its line.
pub fn line_start(text: RopeSlice, range: Range, extend: bool) -> Range {
	let head = range.head.min(text.len_chars());
	let line = text.char_to_line(head);
	make_range(range, text.line_to_char(line), extend)
}

/// Moves the head past the last visible character of its line.
pub fn line_end(text: RopeSlice, range: Range, extend: bool) -> Range {
	let head = range.head.min(text.len_chars());
	let line = text.char_to_line(head);
	make_range(range, line_end_char(text, line), extend)
}

pub fn document_start(range: Range, extend: bool) -> Range {
	make_range(range, 0, extend)
}

pub fn document_end(text: RopeSlice, range: Range, extend: bool) -> Range {
	make_range(range, text.len_chars(), extend)
}

/// Moves the head by a page of `rows` lines.
pub fn move_page(text: RopeSlice, range: Range, dir: Vertical, rows: usize, extend: bool) -> Range {
	move_vertically(text, range, dir, rows.max(1), extend, None).0
}

use ropey::Rope;

use super::*;

fn rope(s: &str) -> Rope {
	Rope::from(s)
}

#[test]
fn right_then_left_round_trips() {
	let text = rope("hello");
	let moved = move_horizontally(text.slice(..), Range::point(0), Horizontal::Right, 3, false);
	assert_eq!(moved, Range::point(3));
	let back = move_horizontally(text.slice(..), moved, Horizontal::Left, 1, false);
	assert_eq!(back, Range::point(2));
}

#[test]
fn horizontal_motion_stops_at_edges() {
	let text = rope("ab");
	let right = move_horizontally(text.slice(..), Range::point(1), Horizontal::Right, 10, false);
	assert_eq!(right, Range::point(2));
	let left = move_horizontally(text.slice(..), Range::point(1), Horizontal::Left, 10, false);
	assert_eq!(left, Range::point(0));
}

#[test]
fn extend_keeps_anchor() {
	let text = rope("hello world");
	let range = move_horizontally(text.slice(..), Range::point(2), Horizontal::Right, 3, true);
	assert_eq!(range, Range::new(2, 5));
}

#[test]
fn collapsing_selection_moves_to_matching_edge() {
	let text = rope("hello world");
	let selection = Range::new(2, 6);
	assert_eq!(
		move_horizontally(text.slice(..), selection, Horizontal::Left, 1, false),
		Range::point(2)
	);
	assert_eq!(
		move_horizontally(text.slice(..), selection, Horizontal::Right, 1, false),
		Range::point(6)
	);
}

#[test]
fn vertical_motion_clamps_to_short_line() {
	let text = rope("long line\nab\nanother long");
	let (down, goal) = move_vertically(text.slice(..), Range::point(7), Vertical::Down, 1, false, None);
	assert_eq!(down, Range::point(12));
	assert_eq!(goal, 7);

	let (again, _) = move_vertically(text.slice(..), down, Vertical::Down, 1, false, Some(goal));
	assert_eq!(again, Range::point(13 + 7));
}

#[test]
fn up_on_first_line_goes_to_start() {
	let text = rope("abc\ndef");
	let (up, _) = move_vertically(text.slice(..), Range::point(2), Vertical::Up, 1, false, None);
	assert_eq!(up, Range::point(0));
}

#[test]
fn down_on_last_line_goes_to_end() {
	let text = rope("abc\ndef");
	let (down, _) = move_vertically(text.slice(..), Range::point(5), Vertical::Down, 1, false, None);
	assert_eq!(down, Range::point(7));
}

#[test]
fn line_end_excludes_newline() {
	let text = rope("abc\r\ndef\n");
	assert_eq!(line_end_char(text.slice(..), 0), 3);
	assert_eq!(line_end_char(text.slice(..), 1), 8);
	assert_eq!(line_end_char(text.slice(..), 2), 9);
}

#[test]
fn home_and_end() {
	let text = rope("one\ntwo three\n");
	let start = line_start(text.slice(..), Range::point(8), false);
	assert_eq!(start, Range::point(4));
	let end = line_end(text.slice(..), Range::point(5), true);
	assert_eq!(end, Range::new(5, 13));
}

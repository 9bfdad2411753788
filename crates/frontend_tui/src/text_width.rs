use unicode_width::UnicodeWidthChar;

/// Columns a tab occupies in the editor pane.
pub const TAB_WIDTH: usize = 4;

/// Display width of a single character. Control characters take no space.
pub fn char_width(ch: char) -> usize {
	if ch == '\t' { TAB_WIDTH } else { ch.width().unwrap_or(0) }
}

/// Display width of a string.
pub fn cell_width(s: &str) -> usize {
	s.chars().map(char_width).sum()
}

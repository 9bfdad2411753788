//! Editor pane: document text with selection and training highlights.
//!
//! The pane lays the rope out as visual rows (one per line, or several when
//! soft wrap is on), scrolls so the cursor stays visible, and reports the
//! cursor cell back to the caller.

use quill_editor::Editor;
use quill_primitives::Rope;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::colors;
use crate::text_width::char_width;

/// Scroll state of the editor pane, kept across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorView {
	/// First visible visual row.
	top: usize,
	/// First visible column when soft wrap is off.
	left: usize,
	/// Height of the pane at the last render.
	height: u16,
}

impl EditorView {
	/// Rows moved by Page Up / Page Down.
	pub fn page_rows(&self) -> usize {
		usize::from(self.height.saturating_sub(1).max(1))
	}

	pub fn top(&self) -> usize {
		self.top
	}

	pub fn left(&self) -> usize {
		self.left
	}

	fn scroll_to(&mut self, row: usize, col: usize, area: Rect, wrap: bool) {
		let height = usize::from(area.height.max(1));
		if row < self.top {
			self.top = row;
		} else if row >= self.top + height {
			self.top = row + 1 - height;
		}

		if wrap {
			self.left = 0;
			return;
		}
		let width = usize::from(area.width.max(1));
		if col < self.left {
			self.left = col;
		} else if col >= self.left + width {
			self.left = col + 1 - width;
		}
	}
}

#[derive(Debug, Clone, Copy)]
struct Cell {
	ch: char,
	idx: usize,
	width: usize,
}

/// A screen row of document text.
#[derive(Debug, Default)]
struct VisualRow {
	cells: Vec<Cell>,
	start: usize,
	/// Char index just past the last cell.
	end: usize,
	/// Last row of its logical line; owns a cursor placed at `end`.
	last_in_line: bool,
}

fn visual_rows(text: &Rope, width: usize, wrap: bool) -> Vec<VisualRow> {
	let mut rows = Vec::new();
	let mut idx = 0;

	for line in text.lines() {
		let mut row = VisualRow {
			start: idx,
			end: idx,
			..VisualRow::default()
		};
		let mut row_width = 0;

		for ch in line.chars() {
			if ch == '\n' || ch == '\r' {
				idx += 1;
				continue;
			}
			let cell_width = char_width(ch);
			if wrap && row_width + cell_width > width && !row.cells.is_empty() {
				let next = VisualRow {
					start: idx,
					end: idx,
					..VisualRow::default()
				};
				rows.push(std::mem::replace(&mut row, next));
				row_width = 0;
			}
			row.cells.push(Cell {
				ch,
				idx,
				width: cell_width,
			});
			row_width += cell_width;
			idx += 1;
			row.end = idx;
		}

		row.last_in_line = true;
		rows.push(row);
	}

	rows
}

/// Visual row and column of char index `pos`.
fn locate(rows: &[VisualRow], pos: usize) -> (usize, usize) {
	for (row_idx, row) in rows.iter().enumerate() {
		if pos >= row.start && (pos < row.end || (pos == row.end && row.last_in_line)) {
			let col = row.cells.iter().take_while(|cell| cell.idx < pos).map(|cell| cell.width).sum();
			return (row_idx, col);
		}
	}
	(rows.len().saturating_sub(1), 0)
}

/// Renders the document into `area` and returns the screen cursor position.
pub fn render(editor: &Editor, view: &mut EditorView, frame: &mut Frame, area: Rect) -> Option<Position> {
	let palette = &editor.theme().palette;
	let doc = editor.document();
	let rows = visual_rows(doc.rope(), usize::from(area.width.max(1)), editor.wrap());

	let (cursor_row, cursor_col) = locate(&rows, doc.cursor());
	view.height = area.height;
	view.scroll_to(cursor_row, cursor_col, area, editor.wrap());

	let base = colors::base(palette);
	let selected = colors::style(palette.selection_fg, palette.selection_bg);
	let correct = colors::style(palette.training_fg, palette.correct_bg);
	let incorrect = colors::style(palette.training_fg, palette.incorrect_bg);
	let sample: Option<Vec<char>> = editor.training().map(|session| session.sample().chars().collect());
	let selection = doc.selection();

	let style_for = |cell: &Cell| -> Style {
		if selection.contains(cell.idx) {
			return selected;
		}
		match &sample {
			Some(sample) if sample.get(cell.idx) == Some(&cell.ch) => correct,
			Some(_) => incorrect,
			None => base,
		}
	};

	let lines: Vec<Line<'static>> = rows
		.iter()
		.skip(view.top)
		.take(usize::from(area.height))
		.map(|row| {
			let mut col = 0;
			let mut spans = Vec::new();
			for cell in &row.cells {
				let cell_start = col;
				col += cell.width;
				if cell_start < view.left {
					continue;
				}
				let symbol = if cell.ch == '\t' { " ".repeat(cell.width) } else { cell.ch.to_string() };
				spans.push(Span::styled(symbol, style_for(cell)));
			}
			Line::from(spans)
		})
		.collect();

	frame.render_widget(Paragraph::new(lines).style(base), area);

	let x = cursor_col.checked_sub(view.left)?;
	let y = cursor_row.checked_sub(view.top)?;
	let (x, y) = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
	(x < area.width && y < area.height).then(|| Position::new(area.x + x, area.y + y))
}

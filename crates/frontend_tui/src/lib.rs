//! Terminal rendering of [`quill_editor::Editor`] state with ratatui.
//!
//! The screen is a one-row menu bar, the editor pane, the training pane while
//! a session runs, and a one-row status bar. Open menus and dialogs are drawn
//! on top.

mod colors;
pub mod layers;
#[cfg(test)]
mod tests;
mod text_width;

use quill_editor::Editor;
use quill_editor::training::highlight::training_lines;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

pub use layers::dialogs::center_rect;
pub use layers::editor_pane::EditorView;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
	pub menu_bar: Rect,
	pub editor: Rect,
	pub training: Option<Rect>,
	pub status: Rect,
}

impl ScreenLayout {
	/// Splits `area`, giving the training pane up to half of the body.
	pub fn new(area: Rect, training_rows: Option<usize>) -> Self {
		let [menu_bar, body, status] = Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)]).areas(area);
		let Some(rows) = training_rows else {
			return Self {
				menu_bar,
				editor: body,
				training: None,
				status,
			};
		};

		let wanted = u16::try_from(rows + 1).unwrap_or(u16::MAX);
		let height = wanted.min(body.height / 2);
		let [editor, training] = Layout::vertical([Constraint::Min(1), Constraint::Length(height)]).areas(body);
		Self {
			menu_bar,
			editor,
			training: Some(training),
			status,
		}
	}
}

/// Draws the whole editor screen.
pub fn render(editor: &Editor, view: &mut EditorView, frame: &mut Frame) {
	let area = frame.area();
	let palette = &editor.theme().palette;
	frame.render_widget(Block::default().style(colors::base(palette)), area);

	let lines = editor.training().map(|session| {
		training_lines(session.sample(), &editor.document().text(), editor.settings().training.words_per_line)
	});
	let layout = ScreenLayout::new(area, lines.as_ref().map(Vec::len));

	let mut cursor = layers::editor_pane::render(editor, view, frame, layout.editor);
	if let (Some(lines), Some(training_area)) = (&lines, layout.training) {
		layers::training_pane::render(editor, lines, frame, training_area);
	}
	layers::status_bar::render(editor, frame, layout.status);
	layers::menu_bar::render(editor, frame, layout.menu_bar);

	if editor.menu().is_open() {
		cursor = None;
	}
	if let Some(dialog) = editor.dialog() {
		cursor = layers::dialogs::render(editor, dialog, frame, area);
	}
	if let Some(position) = cursor {
		frame.set_cursor_position(position);
	}
}

use quill_editor::Editor;
use quill_editor::training::highlight::{CharClass, LabelCell};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::colors;

/// Renders the classified training sample below the editor pane.
pub fn render(editor: &Editor, lines: &[Vec<LabelCell>], frame: &mut Frame, area: Rect) {
	let palette = &editor.theme().palette;
	let base = colors::base(palette);
	let style_of = |class: CharClass| match class {
		CharClass::Correct => colors::style(palette.training_fg, palette.correct_bg),
		CharClass::Incorrect => colors::style(palette.training_fg, palette.incorrect_bg),
		CharClass::Cursor => colors::style(palette.training_fg, palette.cursor_bg),
		CharClass::PendingSpace => colors::style(palette.fg, palette.pending_space_bg),
		CharClass::Pending => base,
	};

	let text: Vec<Line<'static>> = lines
		.iter()
		.map(|cells| {
			Line::from(
				cells
					.iter()
					.filter(|cell| cell.ch != '\n')
					.map(|cell| Span::styled(cell.ch.to_string(), style_of(cell.class)))
					.collect::<Vec<_>>(),
			)
		})
		.collect();

	let block = Block::default()
		.borders(Borders::TOP)
		.title(" Training ")
		.border_style(colors::style(palette.dialog_border, palette.bg))
		.style(base);
	frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: false }), area);
}

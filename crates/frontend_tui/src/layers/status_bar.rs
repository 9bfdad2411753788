use quill_editor::Editor;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::Paragraph;

use crate::colors;
use crate::text_width::cell_width;

/// Renders the status message and, during training, the red error counter.
///
/// While a menu is open the highlighted entry's status tip replaces the
/// message.
pub fn render(editor: &Editor, frame: &mut Frame, area: Rect) {
	let palette = &editor.theme().palette;
	let style = colors::style(palette.status_fg, palette.status_bg);
	let status = editor.status();

	let message = match editor.menu().highlighted() {
		Some(command) => command.status_tip(),
		None => status.message.as_str(),
	};

	let label_width = status.error_label.as_deref().map_or(0, |label| cell_width(label) + 1);
	let [message_area, label_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(label_width as u16)]).areas(area);

	frame.render_widget(Paragraph::new(format!(" {message}")).style(style), message_area);
	if let Some(label) = status.error_label.as_deref() {
		let label_style = style.fg(colors::color(palette.error_fg)).add_modifier(Modifier::BOLD);
		frame.render_widget(Paragraph::new(format!("{label} ")).style(label_style), label_area);
	}
}

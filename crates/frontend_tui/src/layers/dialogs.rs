//! Modal dialogs drawn over the rest of the screen.

use quill_editor::Editor;
use quill_editor::dialog::{Dialog, FindDialog, FindField, MessageLevel, StatisticsView, TextField};
use quill_editor::theme::Palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style, Stylize as _};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Axis, Block, Chart, Clear, Dataset, GraphType, Paragraph, Wrap};

use crate::colors;
use crate::text_width::cell_width;

const MIN_WIDTH: u16 = 40;

/// Centers a rectangle within an area.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
	let x = area.x + (area.width.saturating_sub(width)) / 2;
	let y = area.y + (area.height.saturating_sub(height)) / 2;
	Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Draws `dialog` and returns the text cursor position for input dialogs.
pub fn render(editor: &Editor, dialog: &Dialog, frame: &mut Frame, screen: Rect) -> Option<Position> {
	let palette = &editor.theme().palette;
	match dialog {
		Dialog::Message { level, title, body } => {
			let border = match level {
				MessageLevel::Info => palette.dialog_border,
				MessageLevel::Warning => palette.warning_fg,
				MessageLevel::Error => palette.error_fg,
			};
			let buttons = Line::from(button("OK", true, palette)).centered();
			render_text_box(palette, frame, screen, title, body, border, buttons);
			None
		}
		Dialog::Confirm {
			title,
			body,
			yes_selected,
			..
		} => {
			let buttons = Line::from(vec![button("Yes", *yes_selected, palette), Span::raw("  "), button("No", !*yes_selected, palette)])
				.centered();
			render_text_box(palette, frame, screen, title, body, palette.dialog_border, buttons);
			None
		}
		Dialog::Prompt { title, label, field, .. } => render_prompt(palette, frame, screen, title, label, field),
		Dialog::Find(find) => render_find(palette, frame, screen, find),
		Dialog::Statistics(view) => {
			render_statistics(palette, frame, screen, view);
			None
		}
	}
}

fn button(label: &str, selected: bool, palette: &Palette) -> Span<'static> {
	let style = if selected {
		colors::style(palette.menu_highlight_fg, palette.menu_highlight_bg).add_modifier(Modifier::BOLD)
	} else {
		colors::dialog(palette)
	};
	Span::styled(format!("[ {label} ]"), style)
}

/// Opens a bordered dialog box of the given inner size and returns its inner area.
fn open_box(palette: &Palette, frame: &mut Frame, screen: Rect, title: &str, border: quill_editor::theme::Color, inner: (u16, u16)) -> Rect {
	let area = center_rect(screen, inner.0 + 4, inner.1 + 2);
	let block = Block::bordered()
		.title(Line::from(format!(" {title} ")).bold())
		.border_style(Style::default().fg(colors::color(border)))
		.style(colors::dialog(palette));
	let content = block.inner(area);
	frame.render_widget(Clear, area);
	frame.render_widget(block, area);
	Rect::new(content.x + 1, content.y, content.width.saturating_sub(2), content.height)
}

fn render_text_box(
	palette: &Palette,
	frame: &mut Frame,
	screen: Rect,
	title: &str,
	body: &str,
	border: quill_editor::theme::Color,
	buttons: Line<'static>,
) {
	let max_width = screen.width.saturating_sub(8).max(10);
	let longest = body.lines().map(cell_width).max().unwrap_or(0).max(cell_width(title) + 2) as u16;
	let width = longest.clamp(MIN_WIDTH.min(max_width), max_width);
	let body_rows: u16 = body
		.lines()
		.map(|line| (cell_width(line) as u16).div_ceil(width.max(1)).max(1))
		.sum::<u16>()
		.max(1);
	let inner = open_box(palette, frame, screen, title, border, (width, body_rows + 2));

	let [body_area, _, button_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)]).areas(inner);
	frame.render_widget(Paragraph::new(Text::raw(body.to_string())).wrap(Wrap { trim: false }), body_area);
	frame.render_widget(Paragraph::new(buttons), button_area);
}

/// Draws a labelled single-line field and returns where its cursor sits.
fn render_field(palette: &Palette, frame: &mut Frame, area: Rect, label: &str, field: &TextField, focused: bool) -> Option<Position> {
	let label_width = cell_width(label) as u16 + 1;
	let [label_area, input_area] = Layout::horizontal([Constraint::Length(label_width), Constraint::Min(1)]).areas(area);
	let input_style = colors::base(palette).add_modifier(if focused { Modifier::empty() } else { Modifier::DIM });

	let before: String = field.text().chars().take(field.cursor()).collect();
	let cursor_col = cell_width(&before) as u16;
	let scroll = cursor_col.saturating_sub(input_area.width.saturating_sub(1));

	frame.render_widget(Paragraph::new(label.to_string()), label_area);
	frame.render_widget(Paragraph::new(field.text().to_string()).style(input_style).scroll((0, scroll)), input_area);
	focused.then(|| Position::new(input_area.x + cursor_col - scroll, input_area.y))
}

fn hint(palette: &Palette, text: &str) -> Paragraph<'static> {
	Paragraph::new(text.to_string()).style(colors::dialog(palette).add_modifier(Modifier::DIM))
}

fn render_prompt(palette: &Palette, frame: &mut Frame, screen: Rect, title: &str, label: &str, field: &TextField) -> Option<Position> {
	let width = screen.width.saturating_sub(8).clamp(MIN_WIDTH.min(screen.width), 72);
	let inner = open_box(palette, frame, screen, title, palette.dialog_border, (width, 3));
	let [field_area, _, hint_area] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);
	let cursor = render_field(palette, frame, field_area, label, field, true);
	frame.render_widget(hint(palette, "Enter: OK   Esc: Cancel"), hint_area);
	cursor
}

fn render_find(palette: &Palette, frame: &mut Frame, screen: Rect, find: &FindDialog) -> Option<Position> {
	let width = screen.width.saturating_sub(8).clamp(MIN_WIDTH.min(screen.width), 60);
	let inner = open_box(palette, frame, screen, "Find", palette.dialog_border, (width, 4));
	let [find_area, replace_area, _, hint_area] = Layout::vertical([Constraint::Length(1); 4]).areas(inner);
	let find_cursor = render_field(palette, frame, find_area, "Find Word:   ", &find.find, find.focus == FindField::Find);
	let replace_cursor = render_field(
		palette,
		frame,
		replace_area,
		"Replace Word:",
		&find.replace,
		find.focus == FindField::Replace,
	);
	frame.render_widget(hint(palette, "Enter: Find Next   Ctrl+R: Replace Next   Tab: Switch   Esc: Close"), hint_area);
	find_cursor.or(replace_cursor)
}

fn render_statistics(palette: &Palette, frame: &mut Frame, screen: Rect, view: &StatisticsView) {
	let summary = view.summary.text();
	let summary_rows = summary.lines().count() as u16;
	let width = screen.width.saturating_sub(4).max(MIN_WIDTH.min(screen.width));
	let height = screen.height.saturating_sub(2);
	let inner = open_box(palette, frame, screen, "Training Statistics", palette.dialog_border, (width.saturating_sub(4), height.saturating_sub(2)));

	let [chart_area, summary_area, hint_area] =
		Layout::vertical([Constraint::Min(4), Constraint::Length(summary_rows + 1), Constraint::Length(1)]).areas(inner);

	let [words, time, errors] = view.series();
	let sessions = view.records.len() as f64;
	let y_max = words.iter().chain(&time).chain(&errors).map(|(_, y)| *y).fold(1.0, f64::max) * 1.1;
	let datasets = vec![
		dataset("Words Typed", &words, palette.chart_words),
		dataset("Time Elapsed (sec)", &time, palette.chart_time),
		dataset("Errors Made", &errors, palette.chart_errors),
	];

	let axis_style = colors::dialog(palette);
	let chart = Chart::new(datasets)
		.style(axis_style)
		.hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
		.x_axis(
			Axis::default()
				.title("Session Number")
				.style(axis_style)
				.bounds([1.0, sessions.max(2.0)])
				.labels(vec!["1".to_string(), format!("{}", view.records.len().max(2))]),
		)
		.y_axis(
			Axis::default()
				.style(axis_style)
				.bounds([0.0, y_max])
				.labels(vec!["0".to_string(), format!("{:.0}", y_max)]),
		);
	frame.render_widget(chart, chart_area);
	frame.render_widget(Paragraph::new(summary), summary_area);
	frame.render_widget(hint(palette, "Enter/Esc: Close"), hint_area);
}

fn dataset<'a>(name: &'static str, data: &'a [(f64, f64)], color: quill_editor::theme::Color) -> Dataset<'a> {
	Dataset::default()
		.name(name)
		.marker(Marker::Braille)
		.graph_type(GraphType::Line)
		.style(Style::default().fg(colors::color(color)))
		.data(data)
}

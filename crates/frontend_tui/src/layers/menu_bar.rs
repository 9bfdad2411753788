//! Menu bar and the drop-down of the open menu.

use quill_editor::menu::{MENUS, MenuItem};
use quill_editor::{Command, Editor};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::colors;
use crate::text_width::cell_width;

/// Column where each menu title starts, padded by one space on each side.
pub fn title_offsets() -> Vec<u16> {
	let mut x = 0u16;
	MENUS
		.iter()
		.map(|menu| {
			let at = x;
			x += cell_width(menu.title) as u16 + 2;
			at
		})
		.collect()
}

/// Renders the menu bar into `bar` and the open drop-down below it.
pub fn render(editor: &Editor, frame: &mut Frame, bar: Rect) {
	let palette = &editor.theme().palette;
	let style = colors::style(palette.menu_fg, palette.menu_bg);
	let highlight = colors::style(palette.menu_highlight_fg, palette.menu_highlight_bg);
	let open = editor.menu().open_index();

	let spans: Vec<Span<'static>> = MENUS
		.iter()
		.enumerate()
		.flat_map(|(i, menu)| {
			let style = if open == Some(i) { highlight } else { style };
			let (first, rest) = menu.title.split_at(menu.title.chars().next().map_or(0, char::len_utf8));
			[
				Span::styled(" ", style),
				Span::styled(first.to_string(), style.add_modifier(Modifier::UNDERLINED)),
				Span::styled(format!("{rest} "), style),
			]
		})
		.collect();
	frame.render_widget(Paragraph::new(Line::from(spans)).style(style), bar);

	if let Some(index) = open {
		let x = title_offsets()[index];
		render_dropdown(editor, frame, index, Rect::new(bar.x + x, bar.y + 1, 0, 0), frame.area());
	}
}

fn entry_label(editor: &Editor, command: Command) -> String {
	let check = match command {
		Command::ToggleWrap if editor.wrap() => "✓ ",
		_ => "  ",
	};
	format!("{check}{}", command.label())
}

fn render_dropdown(editor: &Editor, frame: &mut Frame, index: usize, anchor: Rect, screen: Rect) {
	let palette = &editor.theme().palette;
	let style = colors::style(palette.menu_fg, palette.menu_bg);
	let highlight = colors::style(palette.menu_highlight_fg, palette.menu_highlight_bg);
	let items = MENUS[index].items;

	let rows: Vec<(String, String)> = items
		.iter()
		.map(|item| match item {
			MenuItem::Action(command) => (
				entry_label(editor, *command),
				editor.keymap().shortcut_for(*command).map(|chord| chord.to_string()).unwrap_or_default(),
			),
			MenuItem::Separator => (String::new(), String::new()),
		})
		.collect();

	let label_width = rows.iter().map(|(label, _)| cell_width(label)).max().unwrap_or(0);
	let shortcut_width = rows.iter().map(|(_, shortcut)| cell_width(shortcut)).max().unwrap_or(0);
	let inner_width = label_width + shortcut_width + 3;

	let width = (inner_width as u16 + 2).min(screen.width.saturating_sub(anchor.x));
	let height = (items.len() as u16 + 2).min(screen.height.saturating_sub(anchor.y));
	let area = Rect::new(anchor.x, anchor.y, width, height);

	let lines: Vec<Line<'static>> = items
		.iter()
		.zip(&rows)
		.enumerate()
		.map(|(i, (item, (label, shortcut)))| match item {
			MenuItem::Separator => Line::styled("─".repeat(inner_width), style.add_modifier(Modifier::DIM)),
			MenuItem::Action(_) => {
				let row_style = if i == editor.menu().selected() { highlight } else { style };
				let gap = inner_width - 1 - cell_width(label) - cell_width(shortcut);
				Line::styled(format!("{label}{}{shortcut} ", " ".repeat(gap)), row_style)
			}
		})
		.collect();

	let block = Block::bordered().border_style(Style::default().fg(colors::color(palette.dialog_border))).style(style);
	frame.render_widget(Clear, area);
	frame.render_widget(Paragraph::new(lines).block(block), area);
}

use std::time::Instant;

use pretty_assertions::assert_eq;
use quill_editor::dialog::Dialog;
use quill_editor::statistics::{SessionRecord, StatisticsSummary};
use quill_editor::{Clipboard, Command, Editor, Settings, Theme};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use tempfile::TempDir;

use super::*;

fn editor(dir: &TempDir) -> Editor {
	let settings = Settings {
		statistics_file: dir.path().join("stats.json"),
		..Settings::default()
	};
	Editor::new(settings, Theme::default(), Clipboard::local()).unwrap()
}

fn draw(editor: &Editor, width: u16, height: u16) -> Buffer {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	let mut view = EditorView::default();
	terminal.draw(|frame| render(editor, &mut view, frame)).unwrap();
	terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
	(0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn screen(buffer: &Buffer) -> String {
	(0..buffer.area.height).map(|y| row(buffer, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn draws_menu_text_and_word_count() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	editor.paste_text("hello world".into(), Instant::now());

	let buffer = draw(&editor, 40, 6);
	assert_eq!(row(&buffer, 0).trim_end(), " File  Edit  Training  View");
	assert_eq!(row(&buffer, 1).trim_end(), "hello world");
	assert_eq!(row(&buffer, 5).trim_end(), " Word Count: 2");
}

#[test]
fn training_pane_colors_typed_characters() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	let now = Instant::now();
	editor.paste_text("abc".into(), now);
	editor.execute(Command::StartTraining, now);
	editor.edit(now, |doc| doc.insert_char('a'));
	editor.edit(now, |doc| doc.insert_char('x'));

	let buffer = draw(&editor, 30, 12);
	let text = screen(&buffer);
	assert!(text.contains("Training"), "{text}");
	assert!(text.contains("Errors: 1"), "{text}");

	// Editor pane: typed input on row 1.
	assert_eq!(buffer[(0, 1)].bg, Color::Green);
	assert_eq!(buffer[(1, 1)].bg, Color::Red);

	// Training pane: sample on the row below the pane border.
	let sample_row = (0..12).find(|&y| row(&buffer, y).starts_with("abc")).expect("sample row");
	assert_eq!(buffer[(0, sample_row)].bg, Color::Green);
	assert_eq!(buffer[(1, sample_row)].bg, Color::Red);
	assert_eq!(buffer[(2, sample_row)].bg, Color::Rgb(128, 128, 0));
}

#[test]
fn open_menu_lists_entries_with_shortcuts() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	editor.menu_mut().open(0);

	let buffer = draw(&editor, 50, 12);
	let text = screen(&buffer);
	assert!(text.contains("Open file..."), "{text}");
	assert!(text.contains("Ctrl+O"), "{text}");
	assert!(text.contains("Ctrl+Shift+S"), "{text}");
	assert_eq!(row(&buffer, 11).trim_end(), " Open file");
}

#[test]
fn wrap_toggle_is_checked_in_edit_menu() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	editor.menu_mut().open(1);
	assert!(screen(&draw(&editor, 50, 16)).contains("✓ Wrap text to window"));

	editor.menu_mut().close();
	editor.execute(Command::ToggleWrap, Instant::now());
	editor.menu_mut().open(1);
	assert!(screen(&draw(&editor, 50, 16)).contains("  Wrap text to window"));
}

#[test]
fn message_dialog_is_centered_with_body() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	editor.execute(Command::StopTraining, Instant::now());

	let buffer = draw(&editor, 60, 12);
	let text = screen(&buffer);
	assert!(text.contains("Training Not Started"), "{text}");
	assert!(text.contains("Start training before stopping it."), "{text}");
	assert!(text.contains("[ OK ]"), "{text}");
}

#[test]
fn statistics_dialog_shows_chart_and_summary() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor(&dir);
	let records = vec![
		SessionRecord {
			completed: true,
			words_typed: 20,
			elapsed_time: 40,
			error_count: 3,
			timestamp: 0.0,
		},
		SessionRecord {
			completed: true,
			words_typed: 25,
			elapsed_time: 35,
			error_count: 1,
			timestamp: 1.0,
		},
	];
	let summary = StatisticsSummary::of(&records);
	editor.push_dialog(Dialog::Statistics(quill_editor::dialog::StatisticsView { records, summary }));

	let text = screen(&draw(&editor, 80, 30));
	assert!(text.contains("Training Statistics"), "{text}");
	assert!(text.contains("Words Typed"), "{text}");
	assert!(text.contains("Session Number"), "{text}");
	assert!(text.contains("Total time elapsed: 75 seconds"), "{text}");
}

#[test]
fn layout_caps_training_pane_at_half_the_body() {
	let layout = ScreenLayout::new(Rect::new(0, 0, 80, 22), Some(50));
	assert_eq!(layout.editor.height, 10);
	assert_eq!(layout.training.map(|r| r.height), Some(10));

	let layout = ScreenLayout::new(Rect::new(0, 0, 80, 22), Some(2));
	assert_eq!(layout.training.map(|r| r.height), Some(3));
}

#[test]
fn center_rect_clamps_to_area() {
	assert_eq!(center_rect(Rect::new(0, 0, 20, 10), 10, 4), Rect::new(5, 3, 10, 4));
	assert_eq!(center_rect(Rect::new(0, 0, 8, 4), 10, 6), Rect::new(0, 0, 8, 4));
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use quill_editor::{Clipboard, Settings, Theme};
use tempfile::TempDir;
use tokio::runtime::Runtime;

use super::*;

fn app(dir: &TempDir) -> (App, Runtime) {
	let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
	let settings = Settings {
		statistics_file: dir.path().join("stats.json"),
		..Settings::default()
	};
	let editor = Editor::new(settings, Theme::default(), Clipboard::local()).unwrap();
	(App::new(editor, runtime.handle().clone()), runtime)
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
	app.handle_key(KeyEvent::new(code, modifiers));
}

fn type_str(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch), KeyModifiers::NONE);
	}
}

#[test]
fn typing_and_movement_edit_the_document() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	type_str(&mut app, "helo");
	press(&mut app, KeyCode::Left, KeyModifiers::NONE);
	type_str(&mut app, "l");
	press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
	assert_eq!(app.editor.document().text(), "hell\no");
	assert_eq!(app.editor.status().message, "Word Count: 2");
}

#[test]
fn f10_opens_menu_and_enter_runs_entry() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	type_str(&mut app, "some words");
	press(&mut app, KeyCode::F(10), KeyModifiers::NONE);
	assert!(app.editor.menu().is_open());
	press(&mut app, KeyCode::Right, KeyModifiers::NONE);
	press(&mut app, KeyCode::Right, KeyModifiers::NONE);
	press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
	assert!(!app.editor.menu().is_open());
	assert!(app.editor.is_training());
}

#[test]
fn alt_letter_opens_matching_menu() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	press(&mut app, KeyCode::Char('e'), KeyModifiers::ALT);
	assert_eq!(app.editor.menu().open_index(), Some(1));
	press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
	assert!(!app.editor.menu().is_open());
}

#[test]
fn find_dialog_takes_typed_text() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	type_str(&mut app, "one two");
	press(&mut app, KeyCode::Home, KeyModifiers::NONE);
	press(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
	type_str(&mut app, "two");
	press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
	assert_eq!(app.editor.document().selected_text().as_deref(), Some("two"));

	press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
	assert!(!app.editor.has_dialog());
}

#[test]
fn confirm_dialog_answers_with_letters() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	type_str(&mut app, "unsaved");
	press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
	assert!(app.editor.has_dialog());
	press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
	assert!(!app.editor.should_quit());
	press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
	press(&mut app, KeyCode::Char('y'), KeyModifiers::NONE);
	assert!(app.editor.should_quit());
}

#[test]
fn paste_goes_to_focused_prompt() {
	let dir = TempDir::new().unwrap();
	let (mut app, _rt) = app(&dir);
	press(&mut app, KeyCode::Char('o'), KeyModifiers::CONTROL);
	app.handle_paste("/tmp/file.txt\n".into());
	match app.editor.dialog() {
		Some(Dialog::Prompt { field, .. }) => assert_eq!(field.text(), "/tmp/file.txt"),
		other => panic!("expected prompt, got {other:?}"),
	}
	assert!(app.editor.document().is_empty());
}

use std::fs;
use std::time::Instant;

use quill_editor::settings::KeyChord;
use quill_editor::{Clipboard, Command, Editor, Settings, Theme};
use tempfile::TempDir;

#[test]
fn configured_shortcuts_drive_the_keymap() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("settings.json");
	let stats = dir.path().join("stats.json");
	fs::write(
		&path,
		format!(
			r#"{{ "shortcuts": {{ "find": "Ctrl+G" }}, "statistics_file": {:?}, "training": {{ "max_chars": 5 }} }}"#,
			stats.display().to_string()
		),
	)
	.unwrap();

	let settings = Settings::load(Some(&path)).unwrap();
	let (theme, err) = Theme::resolve(&settings, None);
	assert!(err.is_none());
	let mut editor = Editor::new(settings, theme, Clipboard::local()).unwrap();

	assert_eq!(editor.keymap().lookup(&KeyChord::ctrl('g')), Some(Command::Find));

	let now = Instant::now();
	editor.paste_text("too long".into(), now);
	editor.execute(Command::StartTraining, now);
	assert!(!editor.is_training());
	assert_eq!(editor.dialog().map(|d| d.title()), Some("Too Many Characters"));
}

use std::path::Path;
use std::time::Instant;

use quill_editor::{Clipboard, Editor, Settings, Theme};

/// Editor with statistics stored under `dir` and no system clipboard.
pub fn editor_with_stats(dir: &Path) -> Editor {
	let settings = Settings {
		statistics_file: dir.join("training_statistics.json"),
		..Settings::default()
	};
	Editor::new(settings, Theme::default(), Clipboard::local()).expect("default shortcuts are valid")
}

/// Types `text` one character at a time.
pub fn type_str(editor: &mut Editor, text: &str, now: Instant) {
	for ch in text.chars() {
		if ch == '\n' {
			editor.edit(now, |doc| doc.insert_text("\n"));
		} else {
			editor.edit(now, |doc| doc.insert_char(ch));
		}
	}
}

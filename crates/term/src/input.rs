//! Translation of crossterm key events into editor chords.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quill_editor::settings::{ChordKey, KeyChord};

/// Converts a key event into a chord, or `None` for keys quill never binds.
pub fn chord(key: &KeyEvent) -> Option<KeyChord> {
	let mods = key.modifiers;
	let mut shift = mods.contains(KeyModifiers::SHIFT);
	let key_code = match key.code {
		KeyCode::Char(ch) => {
			shift |= ch.is_uppercase();
			ChordKey::Char(ch.to_ascii_lowercase())
		}
		KeyCode::F(n) => ChordKey::F(n),
		KeyCode::Enter => ChordKey::Enter,
		KeyCode::Esc => ChordKey::Esc,
		KeyCode::Tab => ChordKey::Tab,
		KeyCode::BackTab => {
			shift = true;
			ChordKey::Tab
		}
		KeyCode::Backspace => ChordKey::Backspace,
		KeyCode::Delete => ChordKey::Delete,
		KeyCode::Insert => ChordKey::Insert,
		KeyCode::Home => ChordKey::Home,
		KeyCode::End => ChordKey::End,
		KeyCode::PageUp => ChordKey::PageUp,
		KeyCode::PageDown => ChordKey::PageDown,
		KeyCode::Up => ChordKey::Up,
		KeyCode::Down => ChordKey::Down,
		KeyCode::Left => ChordKey::Left,
		KeyCode::Right => ChordKey::Right,
		_ => return None,
	};

	Some(KeyChord {
		ctrl: mods.contains(KeyModifiers::CONTROL),
		alt: mods.contains(KeyModifiers::ALT),
		shift,
		key: key_code,
	})
}

/// Character to insert for a plain typing key.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
	if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
		return None;
	}
	match key.code {
		KeyCode::Char(ch) => Some(ch),
		_ => None,
	}
}

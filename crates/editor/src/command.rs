//! Editor commands and their key bindings.

use crate::settings::{ChordKey, KeyChord, ShortcutChords};

/// Every user-invocable editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	Open,
	Save,
	SaveAs,
	Print,
	Quit,
	Undo,
	Redo,
	Cut,
	Copy,
	Paste,
	SelectAll,
	ToggleWrap,
	Find,
	StartTraining,
	StopTraining,
	WikiTraining,
	ShowStatistics,
	ClearStatistics,
	WordCount,
}

impl Command {
	/// Menu label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Open => "Open file...",
			Self::Save => "Save",
			Self::SaveAs => "Save As...",
			Self::Print => "Print...",
			Self::Quit => "Quit",
			Self::Undo => "Undo",
			Self::Redo => "Redo",
			Self::Cut => "Cut",
			Self::Copy => "Copy",
			Self::Paste => "Paste",
			Self::SelectAll => "Select all",
			Self::ToggleWrap => "Wrap text to window",
			Self::Find => "Find",
			Self::StartTraining => "Start Training",
			Self::StopTraining => "Stop Training",
			Self::WikiTraining => "Wiki",
			Self::ShowStatistics => "Statistics",
			Self::ClearStatistics => "Clear Statistics",
			Self::WordCount => "Word Count",
		}
	}

	/// One-line description shown in the status bar while the entry is highlighted.
	pub fn status_tip(self) -> &'static str {
		match self {
			Self::Open => "Open file",
			Self::Save => "Save current page",
			Self::SaveAs => "Save current page to specified file",
			Self::Print => "Print current page",
			Self::Quit => "Quit the editor",
			Self::Undo => "Undo last change",
			Self::Redo => "Redo last change",
			Self::Cut => "Cut selected text",
			Self::Copy => "Copy selected text",
			Self::Paste => "Paste from clipboard",
			Self::SelectAll => "Select all text",
			Self::ToggleWrap => "Toggle wrap text to window",
			Self::Find => "Find word",
			Self::StartTraining => "Start the typing training",
			Self::StopTraining => "Stop the typing training",
			Self::WikiTraining => "Start the typing training with a Wikipedia!",
			Self::ShowStatistics => "Show typing training statistics",
			Self::ClearStatistics => "Clear typing training statistics",
			Self::WordCount => "Show word count",
		}
	}
}

/// Key chord to command lookup.
#[derive(Debug, Clone)]
pub struct Keymap {
	bindings: Vec<(KeyChord, Command)>,
}

impl Keymap {
	/// Builds the keymap. Configured shortcuts take precedence over the
	/// built-in bindings when both use the same chord.
	pub fn new(configured: ShortcutChords) -> Self {
		let mut bindings = vec![
			(configured.open, Command::Open),
			(configured.save, Command::Save),
			(configured.print, Command::Print),
			(configured.find, Command::Find),
		];

		let builtin = [
			(
				KeyChord {
					shift: true,
					..KeyChord::ctrl('s')
				},
				Command::SaveAs,
			),
			(KeyChord::ctrl('q'), Command::Quit),
			(KeyChord::ctrl('z'), Command::Undo),
			(KeyChord::ctrl('y'), Command::Redo),
			(KeyChord::ctrl('x'), Command::Cut),
			(KeyChord::ctrl('c'), Command::Copy),
			(KeyChord::ctrl('v'), Command::Paste),
			(KeyChord::ctrl('a'), Command::SelectAll),
			(
				KeyChord {
					alt: true,
					..KeyChord::new(ChordKey::Char('z'))
				},
				Command::ToggleWrap,
			),
			(KeyChord::function(5), Command::StartTraining),
			(KeyChord::function(6), Command::StopTraining),
			(KeyChord::function(7), Command::WikiTraining),
			(KeyChord::function(8), Command::ShowStatistics),
			(KeyChord::function(9), Command::WordCount),
		];
		for (chord, command) in builtin {
			if !bindings.iter().any(|(bound, _)| *bound == chord) {
				bindings.push((chord, command));
			}
		}

		Self { bindings }
	}

	pub fn lookup(&self, chord: &KeyChord) -> Option<Command> {
		self.bindings.iter().find(|(bound, _)| bound == chord).map(|(_, command)| *command)
	}

	/// Chord bound to `command`, for display next to menu entries.
	pub fn shortcut_for(&self, command: Command) -> Option<KeyChord> {
		self.bindings.iter().find(|(_, bound)| *bound == command).map(|(chord, _)| *chord)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::Shortcuts;

	fn default_keymap() -> Keymap {
		Keymap::new(Shortcuts::default().chords().expect("default shortcuts parse"))
	}

	#[test]
	fn default_bindings() {
		let keymap = default_keymap();
		assert_eq!(keymap.lookup(&KeyChord::ctrl('o')), Some(Command::Open));
		assert_eq!(keymap.lookup(&KeyChord::function(5)), Some(Command::StartTraining));
		assert_eq!(keymap.lookup(&KeyChord::ctrl('k')), None);
	}

	#[test]
	fn configured_chord_overrides_builtin() {
		let shortcuts = Shortcuts {
			find: "Ctrl+Z".into(),
			..Shortcuts::default()
		};
		let keymap = Keymap::new(shortcuts.chords().expect("valid"));
		assert_eq!(keymap.lookup(&KeyChord::ctrl('z')), Some(Command::Find));
		assert_eq!(keymap.shortcut_for(Command::Undo), None);
	}

	#[test]
	fn shortcut_labels() {
		let keymap = default_keymap();
		assert_eq!(keymap.shortcut_for(Command::SaveAs).map(|c| c.to_string()).as_deref(), Some("Ctrl+Shift+S"));
	}
}

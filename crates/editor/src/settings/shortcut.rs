//! Key chords written as `"Ctrl+Shift+S"` style strings.

use std::fmt;
use std::str::FromStr;

/// A key without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordKey {
	/// A printable character, stored lowercase.
	Char(char),
	/// Function key `F1`..`F12`.
	F(u8),
	Enter,
	Esc,
	Tab,
	Backspace,
	Delete,
	Insert,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
}

/// A key plus modifiers, used for menu shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
	pub key: ChordKey,
}

impl KeyChord {
	pub const fn new(key: ChordKey) -> Self {
		Self {
			ctrl: false,
			alt: false,
			shift: false,
			key,
		}
	}

	pub const fn ctrl(ch: char) -> Self {
		Self {
			ctrl: true,
			..Self::new(ChordKey::Char(ch))
		}
	}

	pub const fn function(n: u8) -> Self {
		Self::new(ChordKey::F(n))
	}
}

/// Error for a chord string that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChord(pub String);

impl fmt::Display for InvalidChord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid key chord: {:?}", self.0)
	}
}

impl std::error::Error for InvalidChord {}

impl FromStr for KeyChord {
	type Err = InvalidChord;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || InvalidChord(s.to_string());
		let parts: Vec<&str> = s.split('+').map(str::trim).collect();
		let (key_part, modifiers) = parts.split_last().ok_or_else(invalid)?;

		let mut chord = KeyChord::new(parse_key(key_part).ok_or_else(invalid)?);
		for modifier in modifiers {
			match modifier.to_ascii_lowercase().as_str() {
				"ctrl" | "control" => chord.ctrl = true,
				"alt" | "meta" => chord.alt = true,
				"shift" => chord.shift = true,
				_ => return Err(invalid()),
			}
		}
		Ok(chord)
	}
}

fn parse_key(raw: &str) -> Option<ChordKey> {
	let mut chars = raw.chars();
	if let (Some(ch), None) = (chars.next(), chars.next()) {
		return Some(ChordKey::Char(ch.to_ascii_lowercase()));
	}

	let lower = raw.to_ascii_lowercase();
	if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
		return (1..=12).contains(&n).then_some(ChordKey::F(n));
	}

	Some(match lower.as_str() {
		"enter" | "return" => ChordKey::Enter,
		"esc" | "escape" => ChordKey::Esc,
		"tab" => ChordKey::Tab,
		"backspace" => ChordKey::Backspace,
		"del" | "delete" => ChordKey::Delete,
		"ins" | "insert" => ChordKey::Insert,
		"home" => ChordKey::Home,
		"end" => ChordKey::End,
		"pgup" | "pageup" => ChordKey::PageUp,
		"pgdown" | "pagedown" => ChordKey::PageDown,
		"up" => ChordKey::Up,
		"down" => ChordKey::Down,
		"left" => ChordKey::Left,
		"right" => ChordKey::Right,
		"space" => ChordKey::Char(' '),
		_ => return None,
	})
}

impl fmt::Display for KeyChord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.ctrl {
			f.write_str("Ctrl+")?;
		}
		if self.alt {
			f.write_str("Alt+")?;
		}
		if self.shift {
			f.write_str("Shift+")?;
		}
		match self.key {
			ChordKey::Char(' ') => f.write_str("Space"),
			ChordKey::Char(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
			ChordKey::F(n) => write!(f, "F{n}"),
			other => write!(f, "{other:?}"),
		}
	}
}

//! User settings loaded from a JSON file.
//!
//! Quill looks for settings in these locations (first match wins):
//!
//! 1. The path given with `--config`
//! 2. `settings.json` in the working directory
//! 3. `$XDG_CONFIG_HOME/quill/settings.json` (or the platform equivalent)
//!
//! Every field is optional; missing fields take their defaults.

pub mod shortcut;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub use shortcut::{ChordKey, InvalidChord, KeyChord};

use crate::statistics::DEFAULT_STATISTICS_FILE;
use crate::training::MAX_SAMPLE_CHARS;

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("I/O error reading {path}: {source}")]
	Io { path: PathBuf, source: std::io::Error },

	#[error("invalid settings in {path}: {source}")]
	Parse { path: PathBuf, source: serde_json::Error },

	#[error("invalid shortcut for '{action}': {value:?}")]
	InvalidShortcut { action: &'static str, value: String },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Shortcut strings for the configurable actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shortcuts {
	pub open: String,
	pub save: String,
	pub print: String,
	pub find: String,
}

impl Default for Shortcuts {
	fn default() -> Self {
		Self {
			open: "Ctrl+O".into(),
			save: "Ctrl+S".into(),
			print: "Ctrl+P".into(),
			find: "Ctrl+F".into(),
		}
	}
}

/// Parsed chords for [`Shortcuts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutChords {
	pub open: KeyChord,
	pub save: KeyChord,
	pub print: KeyChord,
	pub find: KeyChord,
}

impl Shortcuts {
	/// Parses every shortcut string, naming the first action that fails.
	pub fn chords(&self) -> Result<ShortcutChords> {
		let parse = |action: &'static str, value: &str| {
			value.parse::<KeyChord>().map_err(|_| SettingsError::InvalidShortcut {
				action,
				value: value.to_string(),
			})
		};
		Ok(ShortcutChords {
			open: parse("open", &self.open)?,
			save: parse("save", &self.save)?,
			print: parse("print", &self.print)?,
			find: parse("find", &self.find)?,
		})
	}
}

/// Wikipedia sample source options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WikipediaSettings {
	/// Language subdomain, e.g. `en` or `de`.
	pub language: String,
	/// Longest acceptable summary, in words.
	pub max_words: usize,
	/// Articles to try before giving up.
	pub max_attempts: usize,
}

impl Default for WikipediaSettings {
	fn default() -> Self {
		Self {
			language: "en".into(),
			max_words: 200,
			max_attempts: 25,
		}
	}
}

/// Typing trainer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
	pub max_chars: usize,
	pub words_per_line: usize,
}

impl Default for TrainingSettings {
	fn default() -> Self {
		Self {
			max_chars: MAX_SAMPLE_CHARS,
			words_per_line: 10,
		}
	}
}

/// Font entry kept for compatibility with existing settings files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FontSettings {
	#[serde(default)]
	pub font_name: String,
	#[serde(default)]
	pub size: u32,
}

/// All user settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Use a built-in palette named by `theme` instead of `stylesheet`.
	pub use_default_theme: bool,
	/// Built-in palette name.
	pub theme: String,
	/// Path to a TOML palette file, used when `use_default_theme` is false.
	pub stylesheet: Option<PathBuf>,
	/// Ignored: the terminal owns the font.
	pub default_font: Option<FontSettings>,
	pub shortcuts: Shortcuts,
	pub statistics_file: PathBuf,
	pub wikipedia: WikipediaSettings,
	pub training: TrainingSettings,
	/// Seconds between periodic status line refreshes.
	pub status_refresh_secs: u64,
	/// Soft-wrap long lines in the editor pane.
	pub wrap: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			use_default_theme: true,
			theme: "dark".into(),
			stylesheet: None,
			default_font: None,
			shortcuts: Shortcuts::default(),
			statistics_file: PathBuf::from(DEFAULT_STATISTICS_FILE),
			wikipedia: WikipediaSettings::default(),
			training: TrainingSettings::default(),
			status_refresh_secs: 5,
			wrap: true,
		}
	}
}

impl Settings {
	/// Parses settings from a JSON string.
	pub fn parse(input: &str, path: &Path) -> Result<Self> {
		let settings: Settings = serde_json::from_str(input).map_err(|source| SettingsError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		settings.shortcuts.chords()?;
		Ok(settings)
	}

	/// Loads settings from a specific file.
	pub fn load_file(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::parse(&raw, path)?;
		info!(path = %path.display(), "settings loaded");
		Ok(settings)
	}

	/// Loads settings from `explicit` or the first default location that
	/// exists. Returns defaults when no file is found.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load_file(path);
		}

		for candidate in default_locations() {
			if candidate.is_file() {
				return Self::load_file(&candidate);
			}
		}

		debug!("no settings file found, using defaults");
		Ok(Self::default())
	}
}

/// Default settings locations in lookup order.
pub fn default_locations() -> Vec<PathBuf> {
	let mut locations = vec![PathBuf::from(SETTINGS_FILE)];
	if let Some(dir) = dirs::config_dir() {
		locations.push(dir.join("quill").join(SETTINGS_FILE));
	}
	locations
}

//! Color palettes for the terminal UI.
//!
//! Two palettes are built in (`dark`, `light`). A custom palette is a TOML
//! file that names a built-in base and overrides individual slots:
//!
//! ```toml
//! base = "dark"
//!
//! [colors]
//! bg = "#002b36"
//! fg = "#93a1a1"
//! correct_bg = "green"
//! ```


use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::settings::Settings;

/// Errors that can occur when loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid theme file {path}: {error}")]
	Toml { path: PathBuf, error: toml::de::Error },

	#[error("invalid color format: {0}")]
	InvalidColor(String),

	#[error("unknown theme: {0} (expected 'dark' or 'light')")]
	UnknownTheme(String),

	#[error("use_default_theme is false but no stylesheet is set")]
	MissingStylesheet,
}

/// Terminal color, either one of the 16 named colors or 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
	Reset,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	Gray,
	DarkGray,
	LightRed,
	LightGreen,
	LightYellow,
	LightBlue,
	LightMagenta,
	LightCyan,
	White,
	Rgb(u8, u8, u8),
}

impl FromStr for Color {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ThemeError::InvalidColor(s.to_string());
		if let Some(hex) = s.strip_prefix('#') {
			if hex.len() != 6 || !hex.is_ascii() {
				return Err(invalid());
			}
			let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
			return Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
		}

		let normalized: String = s.chars().filter(|c| *c != '-' && *c != '_' && *c != ' ').collect::<String>().to_lowercase();
		Ok(match normalized.as_str() {
			"reset" | "default" => Color::Reset,
			"black" => Color::Black,
			"red" => Color::Red,
			"green" => Color::Green,
			"yellow" => Color::Yellow,
			"blue" => Color::Blue,
			"magenta" => Color::Magenta,
			"cyan" => Color::Cyan,
			"gray" | "grey" => Color::Gray,
			"darkgray" | "darkgrey" => Color::DarkGray,
			"lightred" => Color::LightRed,
			"lightgreen" => Color::LightGreen,
			"lightyellow" => Color::LightYellow,
			"lightblue" => Color::LightBlue,
			"lightmagenta" => Color::LightMagenta,
			"lightcyan" => Color::LightCyan,
			"white" => Color::White,
			_ => return Err(invalid()),
		})
	}
}

impl TryFrom<String> for Color {
	type Error = ThemeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Every color slot the UI paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub bg: Color,
	pub fg: Color,
	pub menu_bg: Color,
	pub menu_fg: Color,
	pub menu_highlight_bg: Color,
	pub menu_highlight_fg: Color,
	pub status_bg: Color,
	pub status_fg: Color,
	pub selection_bg: Color,
	pub selection_fg: Color,
	pub correct_bg: Color,
	pub incorrect_bg: Color,
	pub cursor_bg: Color,
	pub pending_space_bg: Color,
	pub training_fg: Color,
	pub dialog_bg: Color,
	pub dialog_fg: Color,
	pub dialog_border: Color,
	pub error_fg: Color,
	pub warning_fg: Color,
	pub chart_words: Color,
	pub chart_time: Color,
	pub chart_errors: Color,
}

impl Palette {
	pub const DARK: Palette = Palette {
		bg: Color::Rgb(32, 33, 36),
		fg: Color::Rgb(228, 231, 235),
		menu_bg: Color::Rgb(48, 50, 55),
		menu_fg: Color::Rgb(228, 231, 235),
		menu_highlight_bg: Color::Rgb(138, 180, 248),
		menu_highlight_fg: Color::Black,
		status_bg: Color::Rgb(48, 50, 55),
		status_fg: Color::Rgb(189, 193, 198),
		selection_bg: Color::Rgb(66, 99, 155),
		selection_fg: Color::White,
		correct_bg: Color::Green,
		incorrect_bg: Color::Red,
		cursor_bg: Color::Rgb(128, 128, 0),
		pending_space_bg: Color::Rgb(70, 70, 70),
		training_fg: Color::White,
		dialog_bg: Color::Rgb(41, 42, 45),
		dialog_fg: Color::Rgb(228, 231, 235),
		dialog_border: Color::Rgb(138, 180, 248),
		error_fg: Color::LightRed,
		warning_fg: Color::LightYellow,
		chart_words: Color::LightBlue,
		chart_time: Color::LightYellow,
		chart_errors: Color::LightRed,
	};

	pub const LIGHT: Palette = Palette {
		bg: Color::Rgb(250, 250, 250),
		fg: Color::Rgb(32, 33, 36),
		menu_bg: Color::Rgb(230, 230, 230),
		menu_fg: Color::Rgb(32, 33, 36),
		menu_highlight_bg: Color::Rgb(26, 115, 232),
		menu_highlight_fg: Color::White,
		status_bg: Color::Rgb(230, 230, 230),
		status_fg: Color::Rgb(60, 64, 67),
		selection_bg: Color::Rgb(187, 222, 251),
		selection_fg: Color::Black,
		correct_bg: Color::Green,
		incorrect_bg: Color::Red,
		cursor_bg: Color::Rgb(255, 255, 128),
		pending_space_bg: Color::Rgb(210, 210, 210),
		training_fg: Color::Black,
		dialog_bg: Color::Rgb(245, 245, 245),
		dialog_fg: Color::Rgb(32, 33, 36),
		dialog_border: Color::Rgb(26, 115, 232),
		error_fg: Color::Red,
		warning_fg: Color::Rgb(176, 96, 0),
		chart_words: Color::Blue,
		chart_time: Color::Rgb(176, 96, 0),
		chart_errors: Color::Red,
	};
}

/// Optional overrides read from a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaletteOverrides {
	bg: Option<Color>,
	fg: Option<Color>,
	menu_bg: Option<Color>,
	menu_fg: Option<Color>,
	menu_highlight_bg: Option<Color>,
	menu_highlight_fg: Option<Color>,
	status_bg: Option<Color>,
	status_fg: Option<Color>,
	selection_bg: Option<Color>,
	selection_fg: Option<Color>,
	correct_bg: Option<Color>,
	incorrect_bg: Option<Color>,
	cursor_bg: Option<Color>,
	pending_space_bg: Option<Color>,
	training_fg: Option<Color>,
	dialog_bg: Option<Color>,
	dialog_fg: Option<Color>,
	dialog_border: Option<Color>,
	error_fg: Option<Color>,
	warning_fg: Option<Color>,
	chart_words: Option<Color>,
	chart_time: Option<Color>,
	chart_errors: Option<Color>,
}

impl PaletteOverrides {
	fn apply(self, mut palette: Palette) -> Palette {
		macro_rules! merge {
			($($slot:ident),* $(,)?) => {
				$(if let Some(color) = self.$slot {
					palette.$slot = color;
				})*
			};
		}
		merge!(
			bg,
			fg,
			menu_bg,
			menu_fg,
			menu_highlight_bg,
			menu_highlight_fg,
			status_bg,
			status_fg,
			selection_bg,
			selection_fg,
			correct_bg,
			incorrect_bg,
			cursor_bg,
			pending_space_bg,
			training_fg,
			dialog_bg,
			dialog_fg,
			dialog_border,
			error_fg,
			warning_fg,
			chart_words,
			chart_time,
			chart_errors,
		);
		palette
	}
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: Option<String>,
	base: Option<String>,
	#[serde(default)]
	colors: PaletteOverrides,
}

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
	pub name: String,
	pub palette: Palette,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			name: "dark".into(),
			palette: Palette::DARK,
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl Theme {
	/// Looks up a built-in theme by name.
	pub fn builtin(name: &str) -> Option<Self> {
		let palette = match name.trim().to_lowercase().as_str() {
			"dark" => Palette::DARK,
			"light" => Palette::LIGHT,
			_ => return None,
		};
		Some(Self {
			name: name.trim().to_lowercase(),
			palette,
		})
	}

	/// Parses a theme file's contents.
	pub fn parse(input: &str, path: &Path) -> Result<Self, ThemeError> {
		let file: ThemeFile = toml::from_str(input).map_err(|error| ThemeError::Toml {
			path: path.to_path_buf(),
			error,
		})?;

		let base = match file.base.as_deref() {
			Some(name) => Self::builtin(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?,
			None => Self::default(),
		};
		let name = file
			.name
			.or_else(|| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
			.unwrap_or_else(|| "custom".into());

		Ok(Self {
			name,
			palette: file.colors.apply(base.palette),
		})
	}

	/// Loads a theme file from disk.
	pub fn load_file(path: &Path) -> Result<Self, ThemeError> {
		let raw = fs::read_to_string(path).map_err(|error| ThemeError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&raw, path)
	}

	/// Resolves the theme selected by `settings`, optionally overridden by
	/// name. Falls back to the default palette on failure and returns the
	/// error alongside so it can be reported.
	pub fn resolve(settings: &Settings, name_override: Option<&str>) -> (Self, Option<ThemeError>) {
		let result = match (name_override, settings.use_default_theme) {
			(Some(name), _) => Self::builtin(name).ok_or_else(|| ThemeError::UnknownTheme(name.to_string())),
			(None, true) => Self::builtin(&settings.theme).ok_or_else(|| ThemeError::UnknownTheme(settings.theme.clone())),
			(None, false) => match settings.stylesheet.as_deref() {
				Some(path) => Self::load_file(path),
				None => Err(ThemeError::MissingStylesheet),
			},
		};

		match result {
			Ok(theme) => {
				info!(theme = %theme, "theme selected");
				(theme, None)
			}
			Err(error) => {
				warn!(%error, "falling back to default theme");
				(Self::default(), Some(error))
			}
		}
	}
}

use quill_editor::theme::{Color as ThemeColor, Palette};
use ratatui::style::{Color, Style};

/// Converts a theme color to a terminal color.
pub fn color(c: ThemeColor) -> Color {
	match c {
		ThemeColor::Reset => Color::Reset,
		ThemeColor::Black => Color::Black,
		ThemeColor::Red => Color::Red,
		ThemeColor::Green => Color::Green,
		ThemeColor::Yellow => Color::Yellow,
		ThemeColor::Blue => Color::Blue,
		ThemeColor::Magenta => Color::Magenta,
		ThemeColor::Cyan => Color::Cyan,
		ThemeColor::Gray => Color::Gray,
		ThemeColor::DarkGray => Color::DarkGray,
		ThemeColor::LightRed => Color::LightRed,
		ThemeColor::LightGreen => Color::LightGreen,
		ThemeColor::LightYellow => Color::LightYellow,
		ThemeColor::LightBlue => Color::LightBlue,
		ThemeColor::LightMagenta => Color::LightMagenta,
		ThemeColor::LightCyan => Color::LightCyan,
		ThemeColor::White => Color::White,
		ThemeColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
	}
}

pub fn style(fg: ThemeColor, bg: ThemeColor) -> Style {
	Style::default().fg(color(fg)).bg(color(bg))
}

pub fn base(palette: &Palette) -> Style {
	style(palette.fg, palette.bg)
}

pub fn dialog(palette: &Palette) -> Style {
	style(palette.dialog_fg, palette.dialog_bg)
}

use std::io::{self, Stdout};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate-screen session, restored on drop.
pub struct TerminalGuard {
	terminal: Tui,
	title: String,
}

impl TerminalGuard {
	pub fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		let mut stdout = io::stdout();
		if let Err(error) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
			let _ = disable_raw_mode();
			return Err(error);
		}
		let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
		Ok(Self {
			terminal,
			title: String::new(),
		})
	}

	pub fn terminal_mut(&mut self) -> &mut Tui {
		&mut self.terminal
	}

	/// Updates the window title when it changed.
	pub fn set_title(&mut self, title: &str) -> io::Result<()> {
		if self.title != title {
			execute!(self.terminal.backend_mut(), SetTitle(title))?;
			self.title = title.to_string();
		}
		Ok(())
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = execute!(self.terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen);
		let _ = disable_raw_mode();
		let _ = self.terminal.show_cursor();
	}
}

//! Cut/copy/paste register with best-effort system clipboard mirroring.

use tracing::{debug, warn};

/// Clipboard backing the Cut, Copy and Paste commands.
///
/// The internal register always holds the last copied text. When a system
/// clipboard is available it is written on copy and preferred on paste.
pub struct Clipboard {
	register: Option<String>,
	system: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for Clipboard {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Clipboard")
			.field("register", &self.register)
			.field("system", &self.system.is_some())
			.finish()
	}
}

impl Clipboard {
	/// Creates a clipboard that mirrors to the system clipboard when one exists.
	pub fn system() -> Self {
		let system = match arboard::Clipboard::new() {
			Ok(clipboard) => Some(clipboard),
			Err(error) => {
				warn!(%error, "system clipboard unavailable, using internal register");
				None
			}
		};
		Self { register: None, system }
	}

	/// Creates a clipboard that never touches the system clipboard.
	pub fn local() -> Self {
		Self {
			register: None,
			system: None,
		}
	}

	pub fn set(&mut self, text: String) {
		if let Some(system) = self.system.as_mut()
			&& let Err(error) = system.set_text(text.clone())
		{
			warn!(%error, "failed to write system clipboard");
		}
		self.register = Some(text);
	}

	/// Returns the text to paste: system clipboard first, then the register.
	pub fn get(&mut self) -> Option<String> {
		if let Some(system) = self.system.as_mut() {
			match system.get_text() {
				Ok(text) => return Some(text),
				Err(error) => debug!(%error, "system clipboard empty or unreadable"),
			}
		}
		self.register.clone()
	}
}

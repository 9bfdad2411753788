use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use quill_primitives::normalize_to_lf;
use tracing::{error, info};

use super::Editor;
use crate::dialog::{Dialog, PromptAction};
use crate::error::{EditorError, Result};
use crate::print;

impl Editor {
	pub(super) fn prompt_open(&mut self) {
		let initial = self.prompt_directory();
		self.push_dialog(Dialog::prompt("Open File", "Path:", initial, PromptAction::Open));
	}

	pub(super) fn prompt_save_as(&mut self) {
		let initial = self.document.path().map(|path| path.display().to_string()).unwrap_or_default();
		self.push_dialog(Dialog::prompt("Save File", "Path:", initial, PromptAction::SaveAs));
	}

	/// Directory of the current file with a trailing separator, or empty.
	fn prompt_directory(&self) -> String {
		self.document
			.path()
			.and_then(Path::parent)
			.filter(|dir| !dir.as_os_str().is_empty())
			.map(|dir| format!("{}{}", dir.display(), std::path::MAIN_SEPARATOR))
			.unwrap_or_default()
	}

	/// Saves to the current path, prompting for one when the document is
	/// untitled.
	pub(super) fn save(&mut self) {
		match self.document.path().map(Path::to_path_buf) {
			Some(path) => self.save_as(path),
			None => self.prompt_save_as(),
		}
	}

	/// Replaces the document with the contents of `path`.
	pub fn open_file(&mut self, path: PathBuf, now: Instant) {
		match read_text(&path) {
			Ok(text) => {
				info!(path = %path.display(), "file opened");
				self.document.load(&text, Some(path));
				self.text_changed(now);
			}
			Err(err) => {
				error!(error = %err, "open failed");
				self.push_dialog(Dialog::error("Open File", err.to_string()));
			}
		}
	}

	/// Writes the document to `path` and adopts it as the document path.
	pub fn save_as(&mut self, path: PathBuf) {
		let text = self.document.text();
		match fs::write(&path, text).map_err(|source| EditorError::io(&path, source)) {
			Ok(()) => {
				info!(path = %path.display(), "file saved");
				self.status.flash(format!("Saved {}", path.display()));
				self.document.set_path(path);
				self.document.mark_saved();
			}
			Err(err) => {
				error!(error = %err, "save failed");
				self.push_dialog(Dialog::error("Save File", err.to_string()));
			}
		}
	}

	pub(super) fn print_document(&mut self) {
		let title = self.document.display_name();
		match print::print_text(&self.document.text(), &title) {
			Ok(()) => self.status.flash(format!("Sent {title} to the printer")),
			Err(err) => {
				error!(error = %err, "print failed");
				self.push_dialog(Dialog::error("Print", err.to_string()));
			}
		}
	}
}

fn read_text(path: &Path) -> Result<String> {
	let raw = fs::read_to_string(path).map_err(|source| EditorError::io(path, source))?;
	Ok(normalize_to_lf(raw))
}

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use super::Editor;
use crate::dialog::{ConfirmAction, Dialog, FindDialog, PromptAction};
use crate::search;

impl Editor {
	/// Topmost dialog, if any.
	pub fn dialog(&self) -> Option<&Dialog> {
		self.dialogs.last()
	}

	pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
		self.dialogs.last_mut()
	}

	pub fn has_dialog(&self) -> bool {
		!self.dialogs.is_empty()
	}

	pub fn push_dialog(&mut self, dialog: Dialog) {
		debug!(title = dialog.title(), "dialog opened");
		self.menu.close();
		self.dialogs.push(dialog);
	}

	/// Closes the topmost dialog without acting on it.
	pub fn dismiss_dialog(&mut self) {
		if let Some(Dialog::Find(find)) = self.dialogs.pop() {
			self.find_memory = find;
		}
	}

	/// Accepts the topmost dialog: OK, the highlighted confirm button, the
	/// prompt input, or "find next" in the find dialog.
	pub fn submit_dialog(&mut self, now: Instant) {
		let Some(dialog) = self.dialogs.last() else {
			return;
		};
		if matches!(dialog, Dialog::Find(_)) {
			self.find_next();
			return;
		}

		match self.dialogs.pop() {
			Some(Dialog::Confirm {
				action,
				yes_selected: true,
				..
			}) => self.confirmed(action, now),
			Some(Dialog::Prompt { field, action, .. }) => {
				let input = field.text().trim();
				if !input.is_empty() {
					let path = PathBuf::from(input);
					match action {
						PromptAction::Open => self.open_file(path, now),
						PromptAction::SaveAs => self.save_as(path),
					}
				}
			}
			_ => {}
		}
	}

	/// Answers the topmost confirmation directly.
	pub fn answer_confirm(&mut self, yes: bool, now: Instant) {
		if let Some(Dialog::Confirm { yes_selected, .. }) = self.dialogs.last_mut() {
			*yes_selected = yes;
			self.submit_dialog(now);
		}
	}

	fn confirmed(&mut self, action: ConfirmAction, now: Instant) {
		debug!(?action, "confirmed");
		match action {
			ConfirmAction::ClearStatistics => self.clear_statistics(),
			ConfirmAction::Print => self.print_document(),
			ConfirmAction::Quit => self.should_quit = true,
		}
		self.refresh_status(now);
	}

	pub(super) fn open_find(&mut self) {
		let mut find = self.find_memory.clone();
		if let Some(selected) = self.document.selected_text().filter(|text| !text.contains('\n')) {
			find.find = crate::dialog::TextField::new(selected);
		}
		self.push_dialog(Dialog::Find(find));
	}

	fn find_fields(&self) -> Option<&FindDialog> {
		self.dialogs.iter().rev().find_map(|dialog| match dialog {
			Dialog::Find(find) => Some(find),
			_ => None,
		})
	}

	/// Selects the next occurrence of the find dialog's needle.
	pub fn find_next(&mut self) {
		let Some(needle) = self.find_fields().map(|find| find.find.text().to_owned()) else {
			return;
		};
		if !search::find_next(&mut self.document, &needle) {
			self.not_found(&needle);
		}
	}

	/// Replaces the next occurrence of the needle with the replacement text.
	pub fn replace_next(&mut self, now: Instant) {
		let Some((needle, replacement)) = self
			.find_fields()
			.map(|find| (find.find.text().to_owned(), find.replace.text().to_owned()))
		else {
			return;
		};
		if !self.edit(now, |doc| search::replace_next(doc, &needle, &replacement)) {
			self.not_found(&needle);
		}
	}

	fn not_found(&mut self, needle: &str) {
		self.dialogs.push(Dialog::error("Find", format!("Not Found {needle}.")));
	}
}

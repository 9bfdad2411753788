//! Modal dialog state.
//!
//! Dialogs stack: an error raised from inside the find dialog is shown on top
//! of it and dismissing the error returns to the find dialog.

use crate::statistics::{SessionRecord, StatisticsSummary};

/// Severity of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
	Info,
	Warning,
	Error,
}

/// What happens when a confirmation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
	ClearStatistics,
	Print,
	/// Quit and discard unsaved changes.
	Quit,
}

/// What a submitted text prompt does with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
	Open,
	SaveAs,
}

/// Single-line text input with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
	text: String,
	/// Cursor position in chars.
	cursor: usize,
}

impl TextField {
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let cursor = text.chars().count();
		Self { text, cursor }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn insert(&mut self, ch: char) {
		let at = self.byte_offset(self.cursor);
		self.text.insert(at, ch);
		self.cursor += 1;
	}

	pub fn insert_str(&mut self, s: &str) {
		for ch in s.chars().filter(|c| *c != '\n' && *c != '\r') {
			self.insert(ch);
		}
	}

	pub fn backspace(&mut self) {
		if self.cursor == 0 {
			return;
		}
		self.cursor -= 1;
		let at = self.byte_offset(self.cursor);
		self.text.remove(at);
	}

	pub fn delete(&mut self) {
		if self.cursor < self.text.chars().count() {
			let at = self.byte_offset(self.cursor);
			self.text.remove(at);
		}
	}

	pub fn left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.text.chars().count());
	}

	pub fn home(&mut self) {
		self.cursor = 0;
	}

	pub fn end(&mut self) {
		self.cursor = self.text.chars().count();
	}

	fn byte_offset(&self, char_idx: usize) -> usize {
		self.text.char_indices().nth(char_idx).map_or(self.text.len(), |(offset, _)| offset)
	}
}

/// Which field of the find dialog has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FindField {
	#[default]
	Find,
	Replace,
}

/// Find/replace dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindDialog {
	pub find: TextField,
	pub replace: TextField,
	pub focus: FindField,
}

impl FindDialog {
	pub fn focused_mut(&mut self) -> &mut TextField {
		match self.focus {
			FindField::Find => &mut self.find,
			FindField::Replace => &mut self.replace,
		}
	}

	pub fn toggle_focus(&mut self) {
		self.focus = match self.focus {
			FindField::Find => FindField::Replace,
			FindField::Replace => FindField::Find,
		};
	}
}

/// Snapshot of the statistics log for the statistics dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
	pub records: Vec<SessionRecord>,
	pub summary: StatisticsSummary,
}

impl StatisticsView {
	/// Chart series `(session number, value)` for words, seconds and errors.
	pub fn series(&self) -> [Vec<(f64, f64)>; 3] {
		let points = |value: fn(&SessionRecord) -> u64| -> Vec<(f64, f64)> {
			self.records.iter().enumerate().map(|(i, record)| ((i + 1) as f64, value(record) as f64)).collect()
		};
		[points(|r| r.words_typed), points(|r| r.elapsed_time), points(|r| r.error_count)]
	}
}

/// A modal dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
	Message {
		level: MessageLevel,
		title: String,
		body: String,
	},
	Confirm {
		title: String,
		body: String,
		action: ConfirmAction,
		/// Highlighted button: `true` for Yes.
		yes_selected: bool,
	},
	Prompt {
		title: String,
		label: String,
		field: TextField,
		action: PromptAction,
	},
	Find(FindDialog),
	Statistics(StatisticsView),
}

impl Dialog {
	pub fn message(level: MessageLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
		Self::Message {
			level,
			title: title.into(),
			body: body.into(),
		}
	}

	pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self::message(MessageLevel::Info, title, body)
	}

	pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self::message(MessageLevel::Warning, title, body)
	}

	pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self::message(MessageLevel::Error, title, body)
	}

	/// A Yes/No question with No highlighted.
	pub fn confirm(title: impl Into<String>, body: impl Into<String>, action: ConfirmAction) -> Self {
		Self::Confirm {
			title: title.into(),
			body: body.into(),
			action,
			yes_selected: false,
		}
	}

	pub fn prompt(title: impl Into<String>, label: impl Into<String>, initial: impl Into<String>, action: PromptAction) -> Self {
		Self::Prompt {
			title: title.into(),
			label: label.into(),
			field: TextField::new(initial),
			action,
		}
	}

	pub fn title(&self) -> &str {
		match self {
			Self::Message { title, .. } | Self::Confirm { title, .. } | Self::Prompt { title, .. } => title,
			Self::Find(_) => "Find",
			Self::Statistics(_) => "Training Statistics",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_field_edits_at_cursor() {
		let mut field = TextField::new("héllo");
		field.left();
		field.left();
		field.insert('X');
		assert_eq!(field.text(), "hélXlo");
		field.backspace();
		field.backspace();
		assert_eq!(field.text(), "hélo");
		field.home();
		field.delete();
		assert_eq!(field.text(), "élo");
		field.end();
		field.right();
		assert_eq!(field.cursor(), 3);
	}

	#[test]
	fn pasted_newlines_are_dropped() {
		let mut field = TextField::default();
		field.insert_str("a\r\nb");
		assert_eq!(field.text(), "ab");
	}

	#[test]
	fn confirm_defaults_to_no() {
		let dialog = Dialog::confirm("Confirm Action", "Sure?", ConfirmAction::ClearStatistics);
		assert!(matches!(dialog, Dialog::Confirm { yes_selected: false, .. }));
	}

	#[test]
	fn statistics_series_are_one_based() {
		let record = |words| SessionRecord {
			completed: true,
			words_typed: words,
			elapsed_time: 10,
			error_count: 1,
			timestamp: 0.0,
		};
		let records = vec![record(4), record(9)];
		let view = StatisticsView {
			summary: StatisticsSummary::of(&records),
			records,
		};
		let [words, time, errors] = view.series();
		assert_eq!(words, vec![(1.0, 4.0), (2.0, 9.0)]);
		assert_eq!(time, vec![(1.0, 10.0), (2.0, 10.0)]);
		assert_eq!(errors.len(), 2);
	}
}

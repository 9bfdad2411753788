//! Document - the text content of the editor plus its cursor and history.
//!
//! A [`Document`] owns the rope, the selection, the optional backing file
//! path and a snapshot undo history. Every mutation goes through a small set
//! of methods that record history and bump the version, so callers can detect
//! text changes by comparing [`Document::version`] before and after.


use std::path::{Path, PathBuf};

use quill_primitives::movement::{self, Horizontal, Vertical};
use quill_primitives::{Range, Rope};

use crate::undo_store::{DocumentSnapshot, UndoStore};

/// Application name shown in window titles.
pub const APP_NAME: &str = "learn to write";

/// A text document with selection and undo history.
#[derive(Debug)]
pub struct Document {
	/// The text content.
	content: Rope,
	/// Associated file path. `None` for untitled documents.
	path: Option<PathBuf>,
	/// Cursor (head) and selection anchor.
	selection: Range,
	/// Column that vertical motions try to keep.
	goal_col: Option<usize>,
	history: UndoStore,
	/// Version of the current content.
	version: u64,
	/// Next version number handed out; never reused after undo.
	next_version: u64,
	/// Version that was last loaded from or written to disk.
	saved_version: u64,
	/// Whether the next typed character may join the previous undo step.
	coalesce: bool,
}

impl Default for Document {
	fn default() -> Self {
		Self::scratch()
	}
}

impl Document {
	/// Creates a new document with the given content and optional file path.
	pub fn new(content: &str, path: Option<PathBuf>) -> Self {
		Self {
			content: Rope::from(content),
			path,
			selection: Range::point(0),
			goal_col: None,
			history: UndoStore::new(),
			version: 0,
			next_version: 1,
			saved_version: 0,
			coalesce: false,
		}
	}

	/// Creates an empty untitled document.
	pub fn scratch() -> Self {
		Self::new("", None)
	}

	pub fn rope(&self) -> &Rope {
		&self.content
	}

	/// Returns the full text as a `String`.
	pub fn text(&self) -> String {
		self.content.to_string()
	}

	pub fn len_chars(&self) -> usize {
		self.content.len_chars()
	}

	pub fn is_empty(&self) -> bool {
		self.content.len_chars() == 0
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn set_path(&mut self, path: PathBuf) {
		self.path = Some(path);
	}

	/// File name of the backing path, or `"Untitled"`.
	pub fn display_name(&self) -> String {
		self.path
			.as_deref()
			.and_then(Path::file_name)
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_else(|| "Untitled".to_string())
	}

	/// Window title: `"<file name> - learn to write"`.
	pub fn title(&self) -> String {
		format!("{} - {APP_NAME}", self.display_name())
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	/// Returns true when the content differs from what was last loaded or saved.
	pub fn is_modified(&self) -> bool {
		self.version != self.saved_version
	}

	/// Marks the current content as persisted.
	pub fn mark_saved(&mut self) {
		self.saved_version = self.version;
	}

	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	pub fn selection(&self) -> Range {
		self.selection
	}

	/// Cursor position in chars.
	pub fn cursor(&self) -> usize {
		self.selection.head
	}

	/// Sets the selection, clamped to the document length.
	pub fn set_selection(&mut self, range: Range) {
		self.selection = range.clamp(self.content.len_chars());
		self.goal_col = None;
		self.coalesce = false;
	}

	pub fn select_all(&mut self) {
		self.set_selection(Range::new(0, self.content.len_chars()));
	}

	/// Returns the selected text, or `None` for an empty selection.
	pub fn selected_text(&self) -> Option<String> {
		if self.selection.is_empty() {
			return None;
		}
		Some(self.content.slice(self.selection.from()..self.selection.to()).to_string())
	}

	/// Replaces the whole content and history, as when a file is opened.
	pub fn load(&mut self, content: &str, path: Option<PathBuf>) {
		*self = Self::new(content, path);
	}

	/// Replaces the whole content as one undoable edit. The cursor moves to
	/// the start of the document.
	pub fn replace_all(&mut self, content: &str) {
		self.record();
		self.content = Rope::from(content);
		self.selection = Range::point(0);
		self.goal_col = None;
		self.bump_version();
	}

	/// Removes all text as one undoable edit.
	pub fn clear(&mut self) {
		if !self.is_empty() {
			self.replace_all("");
		}
	}

	/// Removes all text and drops the undo history. The path is kept.
	pub fn reset(&mut self) {
		self.history.clear();
		self.coalesce = false;
		self.goal_col = None;
		self.selection = Range::point(0);
		if !self.is_empty() {
			self.content = Rope::new();
			self.bump_version();
		}
	}

	/// Inserts `text` in place of the selection and leaves the cursor after it.
	pub fn insert_text(&mut self, text: &str) {
		if text.is_empty() && self.selection.is_empty() {
			return;
		}
		self.record();
		self.splice(text);
	}

	/// Inserts a typed character. Runs of typed characters within a word form
	/// a single undo step.
	pub fn insert_char(&mut self, ch: char) {
		let joins_previous = self.coalesce && self.selection.is_empty();
		if !joins_previous {
			self.record();
		}
		let mut buf = [0u8; 4];
		self.splice(ch.encode_utf8(&mut buf));
		self.coalesce = !ch.is_whitespace();
	}

	/// Deletes the selection, or the grapheme before the cursor.
	pub fn backspace(&mut self) {
		if self.selection.is_empty() {
			let head = self.selection.head;
			if head == 0 {
				return;
			}
			let prev = quill_primitives::graphemes::prev_grapheme_boundary(self.content.slice(..), head);
			self.selection = Range::new(head, prev);
		}
		self.record();
		self.splice("");
	}

	/// Deletes the selection, or the grapheme after the cursor.
	pub fn delete_forward(&mut self) {
		if self.selection.is_empty() {
			let head = self.selection.head;
			if head >= self.content.len_chars() {
				return;
			}
			let next = quill_primitives::graphemes::next_grapheme_boundary(self.content.slice(..), head);
			self.selection = Range::new(head, next);
		}
		self.record();
		self.splice("");
	}

	/// Deletes and returns the selected text.
	pub fn delete_selection(&mut self) -> Option<String> {
		let removed = self.selected_text()?;
		self.record();
		self.splice("");
		Some(removed)
	}

	/// Restores the state before the last edit. Returns whether anything changed.
	pub fn undo(&mut self) -> bool {
		let current = self.snapshot();
		match self.history.undo(current) {
			Some(step) => {
				self.restore(step);
				true
			}
			None => false,
		}
	}

	/// Re-applies the last undone edit. Returns whether anything changed.
	pub fn redo(&mut self) -> bool {
		let current = self.snapshot();
		match self.history.redo(current) {
			Some(step) => {
				self.restore(step);
				true
			}
			None => false,
		}
	}

	pub fn move_left(&mut self, extend: bool) {
		let range = movement::move_horizontally(self.content.slice(..), self.selection, Horizontal::Left, 1, extend);
		self.set_selection(range);
	}

	pub fn move_right(&mut self, extend: bool) {
		let range = movement::move_horizontally(self.content.slice(..), self.selection, Horizontal::Right, 1, extend);
		self.set_selection(range);
	}

	pub fn move_up(&mut self, rows: usize, extend: bool) {
		self.move_vertical(Vertical::Up, rows, extend);
	}

	pub fn move_down(&mut self, rows: usize, extend: bool) {
		self.move_vertical(Vertical::Down, rows, extend);
	}

	pub fn move_line_start(&mut self, extend: bool) {
		let range = movement::line_start(self.content.slice(..), self.selection, extend);
		self.set_selection(range);
	}

	pub fn move_line_end(&mut self, extend: bool) {
		let range = movement::line_end(self.content.slice(..), self.selection, extend);
		self.set_selection(range);
	}

	pub fn move_document_start(&mut self, extend: bool) {
		self.set_selection(movement::document_start(self.selection, extend));
	}

	pub fn move_document_end(&mut self, extend: bool) {
		self.set_selection(movement::document_end(self.content.slice(..), self.selection, extend));
	}

	fn move_vertical(&mut self, dir: Vertical, rows: usize, extend: bool) {
		let (range, goal) =
			movement::move_vertically(self.content.slice(..), self.selection, dir, rows, extend, self.goal_col);
		self.set_selection(range);
		self.goal_col = Some(goal);
	}

	fn snapshot(&self) -> DocumentSnapshot {
		DocumentSnapshot {
			rope: self.content.clone(),
			selection: self.selection,
			version: self.version,
		}
	}

	fn restore(&mut self, step: DocumentSnapshot) {
		self.content = step.rope;
		self.selection = step.selection.clamp(self.content.len_chars());
		self.version = step.version;
		self.goal_col = None;
		self.coalesce = false;
	}

	fn record(&mut self) {
		let snapshot = self.snapshot();
		self.history.record_snapshot(snapshot);
		self.coalesce = false;
	}

	/// Replaces the selected extent with `text` and bumps the version.
	fn splice(&mut self, text: &str) {
		let from = self.selection.from();
		let to = self.selection.to();
		if from < to {
			self.content.remove(from..to);
		}
		self.content.insert(from, text);
		self.selection = Range::point(from + text.chars().count());
		self.goal_col = None;
		self.bump_version();
	}

	fn bump_version(&mut self) {
		self.version = self.next_version;
		self.next_version += 1;
	}
}

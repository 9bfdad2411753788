//! Snapshot undo history for a document.
//!
//! Every step stores a full rope copy alongside the selection at that point.
//! Rope clones share structure, so a snapshot costs only the nodes an edit
//! later replaces.


use quill_primitives::{Range, Rope};

/// Maximum undo history size.
pub const MAX_UNDO: usize = 100;

/// Snapshot of document state for undo operations.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
	/// Document text content.
	pub rope: Rope,
	/// Selection at snapshot time.
	pub selection: Range,
	/// Document version at snapshot time.
	pub version: u64,
}

/// Snapshot-based undo store.
#[derive(Debug, Default)]
pub struct UndoStore {
	undo_stack: Vec<DocumentSnapshot>,
	redo_stack: Vec<DocumentSnapshot>,
}

impl UndoStore {
	/// Creates a new empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	/// Returns the undo stack length.
	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	/// Returns the redo stack length.
	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// Drops all recorded history.
	pub fn clear(&mut self) {
		self.undo_stack.clear();
		self.redo_stack.clear();
	}

	/// Records a snapshot before an edit.
	///
	/// Call this before applying the edit to capture the pre-edit state.
	/// Automatically enforces [`MAX_UNDO`] by removing the oldest entry.
	pub fn record_snapshot(&mut self, snapshot: DocumentSnapshot) {
		self.undo_stack.push(snapshot);
		self.redo_stack.clear();

		if self.undo_stack.len() > MAX_UNDO {
			self.undo_stack.remove(0);
		}
	}

	/// Undoes the last change.
	///
	/// Pops the most recent snapshot from the undo stack and saves `current`
	/// to the redo stack. Returns the state to restore, or `None` if the undo
	/// stack is empty.
	pub fn undo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
		let step = self.undo_stack.pop()?;
		self.redo_stack.push(current);
		Some(step)
	}

	/// Redoes the last undone change.
	pub fn redo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
		let step = self.redo_stack.pop()?;
		self.undo_stack.push(current);
		Some(step)
	}
}

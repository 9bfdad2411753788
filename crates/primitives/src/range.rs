/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head is the cursor. Unlike a modal
/// editor the head sits *between* characters, so the covered extent is the
/// half-open interval `from()..to()` in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Start of the covered extent (inclusive).
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	/// End of the covered extent (exclusive).
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	#[inline]
	pub fn len(&self) -> CharLen {
		self.to() - self.from()
	}

	/// Returns true if anchor equals head (zero-width cursor).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Returns whether `pos` lies inside the covered extent.
	#[inline]
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.from() && pos < self.to()
	}

	/// Clamps both ends to `max`.
	pub fn clamp(self, max: CharIdx) -> Self {
		Self::new(self.anchor.min(max), self.head.min(max))
	}
}

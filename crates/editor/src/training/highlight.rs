//! Per-character classification of typed input against a training sample.

/// Visual class of one sample character in the training pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
	/// Typed and equal to the sample.
	Correct,
	/// Typed and different from the sample.
	Incorrect,
	/// Next character to type.
	Cursor,
	/// Not yet typed space, shaded so word gaps stay visible.
	PendingSpace,
	/// Not yet typed.
	Pending,
}

/// One rendered character of the training pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCell {
	/// Sample character. A `'\n'` cell closes its line.
	pub ch: char,
	pub class: CharClass,
}

/// Lays out the sample as lines of classified cells.
///
/// A line break is inserted before the space that completes every
/// `words_per_line`-th word, and after every newline in the sample.
pub fn training_lines(sample: &str, input: &str, words_per_line: usize) -> Vec<Vec<LabelCell>> {
	let typed: Vec<char> = input.chars().collect();
	let mut lines = vec![Vec::new()];
	let mut words = 0;

	for (i, ch) in sample.chars().enumerate() {
		if ch == ' ' {
			words += 1;
			if words >= words_per_line {
				lines.push(Vec::new());
				words = 0;
			}
		}

		let class = match typed.get(i) {
			Some(&t) if t == ch => CharClass::Correct,
			Some(_) => CharClass::Incorrect,
			None if i == typed.len() => CharClass::Cursor,
			None if ch == ' ' => CharClass::PendingSpace,
			None => CharClass::Pending,
		};

		if let Some(line) = lines.last_mut() {
			line.push(LabelCell { ch, class });
		}
		if ch == '\n' {
			lines.push(Vec::new());
		}
	}

	lines
}

/// Returns, for every typed character, whether it matches the sample at the
/// same position. Characters past the end of the sample never match.
pub fn input_matches<'a>(input: &'a str, sample: &'a str) -> impl Iterator<Item = bool> + 'a {
	let mut expected = sample.chars();
	input.chars().map(move |typed| expected.next() == Some(typed))
}

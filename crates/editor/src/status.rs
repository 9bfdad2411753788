//! Status bar text.

use std::time::Instant;

use quill_primitives::word_count;

use crate::training::TrainingSession;

/// Contents of the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
	/// Left-aligned message.
	pub message: String,
	/// Right-aligned error counter, shown in red during training.
	pub error_label: Option<String>,
}

impl StatusLine {
	/// Recomputes the status from the editor text and the training session.
	pub fn refresh(&mut self, text: &str, training: Option<&TrainingSession>, now: Instant) {
		match training {
			Some(session) => {
				let elapsed = session.elapsed_secs(now);
				self.message = format!(
					"Words left: {} | Time: {}:{:02}",
					session.words_left(text),
					elapsed / 60,
					elapsed % 60
				);
				self.error_label = Some(format!("Errors: {}", session.error_count()));
			}
			None => {
				self.message = format!("Word Count: {}", word_count(text));
				self.error_label = None;
			}
		}
	}

	/// Replaces the message until the next refresh.
	pub fn flash(&mut self, message: impl Into<String>) {
		self.message = message.into();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::training::MAX_SAMPLE_CHARS;

	#[test]
	fn idle_shows_word_count() {
		let mut status = StatusLine::default();
		status.refresh("three little words", None, Instant::now());
		assert_eq!(status.message, "Word Count: 3");
		assert_eq!(status.error_label, None);
	}

	#[test]
	fn training_shows_progress_and_errors() {
		let start = Instant::now();
		let mut session = TrainingSession::start("one two three", MAX_SAMPLE_CHARS, start).expect("valid");
		session.track_input("onf");

		let mut status = StatusLine::default();
		status.refresh("onf", Some(&session), start + Duration::from_secs(125));
		assert_eq!(status.message, "Words left: 2 | Time: 2:05");
		assert_eq!(status.error_label.as_deref(), Some("Errors: 1"));
	}

	#[test]
	fn flash_is_replaced_on_refresh() {
		let mut status = StatusLine::default();
		status.flash("Loaded text from: https://example.org");
		assert_eq!(status.message, "Loaded text from: https://example.org");
		status.refresh("", None, Instant::now());
		assert_eq!(status.message, "Word Count: 0");
	}
}

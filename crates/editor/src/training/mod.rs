//! Typing-training session state.
//!
//! A session compares the typed input against a sample position by position.
//! Mistakes are counted cumulatively: correcting a wrong character lowers the
//! number of currently visible mismatches but never the session error count.

pub mod highlight;

use std::time::Instant;

use quill_primitives::word_count;
use thiserror::Error;
use tracing::{debug, info};

/// Default upper bound for the sample length, in characters.
pub const MAX_SAMPLE_CHARS: usize = 1500;

/// Reasons a training session cannot start or stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainingError {
	#[error("Enter text for training before starting.")]
	EmptySample,
	#[error("The training text is too long. Enter fewer characters.")]
	SampleTooLong { len: usize, max: usize },
	#[error("Start training before stopping it.")]
	NotStarted,
}

impl TrainingError {
	/// Dialog title used when reporting this error.
	pub fn title(&self) -> &'static str {
		match self {
			Self::EmptySample => "Error",
			Self::SampleTooLong { .. } => "Too Many Characters",
			Self::NotStarted => "Training Not Started",
		}
	}
}

/// Result of feeding new input to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
	/// Input does not yet equal the sample.
	Typing,
	/// Input equals the sample exactly.
	Complete,
}

/// An active typing-training session.
#[derive(Debug, Clone)]
pub struct TrainingSession {
	sample: String,
	sample_chars: Vec<char>,
	started: Instant,
	error_count: usize,
	current_errors: usize,
}

impl TrainingSession {
	/// Starts a session on `text` trimmed of surrounding whitespace.
	pub fn start(text: &str, max_chars: usize, now: Instant) -> Result<Self, TrainingError> {
		let sample = text.trim();
		if sample.is_empty() {
			return Err(TrainingError::EmptySample);
		}
		let len = sample.chars().count();
		if len > max_chars {
			return Err(TrainingError::SampleTooLong { len, max: max_chars });
		}

		info!(chars = len, words = word_count(sample), "training started");
		Ok(Self {
			sample: sample.to_string(),
			sample_chars: sample.chars().collect(),
			started: now,
			error_count: 0,
			current_errors: 0,
		})
	}

	pub fn sample(&self) -> &str {
		&self.sample
	}

	/// Total mistakes made so far.
	pub fn error_count(&self) -> usize {
		self.error_count
	}

	/// Mismatches visible in the most recently tracked input.
	pub fn current_errors(&self) -> usize {
		self.current_errors
	}

	pub fn started(&self) -> Instant {
		self.started
	}

	/// Whole seconds elapsed since the session started.
	pub fn elapsed_secs(&self, now: Instant) -> u64 {
		now.saturating_duration_since(self.started).as_secs()
	}

	/// Sample words minus typed words; negative when the input has extra words.
	pub fn words_left(&self, input: &str) -> i64 {
		word_count(&self.sample) as i64 - word_count(input) as i64
	}

	/// Compares `input` with the sample and updates the error counters.
	pub fn track_input(&mut self, input: &str) -> Progress {
		let new_errors = input.chars().zip(self.sample_chars.iter()).filter(|(typed, expected)| typed != *expected).count();

		if new_errors > self.current_errors {
			self.error_count += new_errors - self.current_errors;
		}
		self.current_errors = new_errors;
		debug!(new_errors, total = self.error_count, "tracked input");

		if input == self.sample {
			Progress::Complete
		} else {
			Progress::Typing
		}
	}

	/// Ends the session and produces its report.
	pub fn finish(self, input: &str, completed: bool, now: Instant) -> SessionReport {
		let report = SessionReport {
			completed,
			words_typed: word_count(input),
			elapsed_secs: self.elapsed_secs(now),
			error_count: self.error_count,
		};
		info!(
			completed,
			words = report.words_typed,
			secs = report.elapsed_secs,
			errors = report.error_count,
			"training finished"
		);
		report
	}
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReport {
	pub completed: bool,
	pub words_typed: usize,
	pub elapsed_secs: u64,
	pub error_count: usize,
}

impl SessionReport {
	/// Words per minute, 0 when no whole second has elapsed.
	pub fn words_per_minute(&self) -> f64 {
		if self.elapsed_secs == 0 {
			return 0.0;
		}
		self.words_typed as f64 / self.elapsed_secs as f64 * 60.0
	}

	pub fn title(&self) -> &'static str {
		if self.completed { "Training Completed" } else { "Training Stopped" }
	}

	/// Multi-line summary shown when the session ends.
	pub fn message(&self) -> String {
		let headline = if self.completed {
			"You have successfully completed the training!"
		} else {
			"The training has been stopped."
		};
		format!(
			"{headline}\nWords: {}, Time: {} min. {} sec., \nWords per minute: {:.2}\nErrors: {}",
			self.words_typed,
			self.elapsed_secs / 60,
			self.elapsed_secs % 60,
			self.words_per_minute(),
			self.error_count,
		)
	}
}

//! Persisted log of finished training sessions.
//!
//! The log is a JSON array of [`SessionRecord`]s rewritten in full on every
//! append. A missing or unreadable file is treated as an empty log so that a
//! corrupt file never blocks training.


use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EditorError, Result};
use crate::training::SessionReport;

/// Default statistics file name, relative to the working directory.
pub const DEFAULT_STATISTICS_FILE: &str = "training_statistics.json";

/// One finished session as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
	pub completed: bool,
	pub words_typed: u64,
	/// Whole seconds.
	pub elapsed_time: u64,
	pub error_count: u64,
	/// Unix time in seconds when the session ended.
	pub timestamp: f64,
}

impl SessionRecord {
	/// Builds a record from a session report, stamped with the current time.
	pub fn from_report(report: &SessionReport) -> Self {
		let timestamp = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|elapsed| elapsed.as_secs_f64())
			.unwrap_or_default();
		Self {
			completed: report.completed,
			words_typed: report.words_typed as u64,
			elapsed_time: report.elapsed_secs,
			error_count: report.error_count as u64,
			timestamp,
		}
	}
}

/// Aggregates over all recorded sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsSummary {
	pub total_sessions: usize,
	pub completed_sessions: usize,
	pub total_words: u64,
	pub total_seconds: u64,
	pub total_errors: u64,
}

impl StatisticsSummary {
	pub fn of(records: &[SessionRecord]) -> Self {
		records.iter().fold(
			Self {
				total_sessions: records.len(),
				..Self::default()
			},
			|mut acc, record| {
				acc.completed_sessions += usize::from(record.completed);
				acc.total_words += record.words_typed;
				acc.total_seconds += record.elapsed_time;
				acc.total_errors += record.error_count;
				acc
			},
		)
	}

	/// Human-readable summary block shown under the statistics chart.
	pub fn text(&self) -> String {
		format!(
			"Total sessions: {}\nCompleted sessions: {}\nTotal words typed: {}\nTotal time elapsed: {} seconds\nTotal errors made: {}",
			self.total_sessions, self.completed_sessions, self.total_words, self.total_seconds, self.total_errors,
		)
	}
}

/// The statistics log and its backing file.
#[derive(Debug, Clone)]
pub struct StatisticsLog {
	path: PathBuf,
	records: Vec<SessionRecord>,
}

impl StatisticsLog {
	/// Opens the log at `path`, reading whatever it currently holds.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let mut log = Self {
			path: path.into(),
			records: Vec::new(),
		};
		log.reload();
		log
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn records(&self) -> &[SessionRecord] {
		&self.records
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn summary(&self) -> StatisticsSummary {
		StatisticsSummary::of(&self.records)
	}

	/// Re-reads the file. Missing files and invalid JSON yield an empty log.
	pub fn reload(&mut self) {
		self.records = match fs::read_to_string(&self.path) {
			Ok(raw) => match serde_json::from_str(&raw) {
				Ok(records) => records,
				Err(error) => {
					warn!(path = %self.path.display(), %error, "statistics file is not valid JSON, starting empty");
					Vec::new()
				}
			},
			Err(error) => {
				debug!(path = %self.path.display(), %error, "no statistics file");
				Vec::new()
			}
		};
	}

	/// Appends a record and rewrites the file.
	pub fn append(&mut self, record: SessionRecord) -> Result<()> {
		self.records.push(record);
		self.save()
	}

	/// Empties the log and writes `[]` to the file.
	pub fn clear(&mut self) -> Result<()> {
		fs::write(&self.path, "[]").map_err(|source| EditorError::io(&self.path, source))?;
		self.records.clear();
		Ok(())
	}

	/// Writes all records as a JSON array indented with four spaces.
	pub fn save(&self) -> Result<()> {
		let mut buf = Vec::new();
		let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
		let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
		self.records.serialize(&mut serializer).map_err(|source| EditorError::StatisticsEncode {
			path: self.path.clone(),
			source,
		})?;

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|source| EditorError::io(parent, source))?;
		}
		let mut file = fs::File::create(&self.path).map_err(|source| EditorError::io(&self.path, source))?;
		file.write_all(&buf).map_err(|source| EditorError::io(&self.path, source))?;
		debug!(path = %self.path.display(), sessions = self.records.len(), "statistics saved");
		Ok(())
	}
}

//! Error types for editor operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised by document, statistics and printing operations.
#[derive(Debug, Error)]
pub enum EditorError {
	/// Reading or writing a file failed.
	#[error("{path}: {source}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The statistics log could not be serialized.
	#[error("failed to encode statistics for {path}: {source}")]
	StatisticsEncode {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// Neither `lp` nor `lpr` is on the search path.
	#[error("no print spooler found (tried lp and lpr)")]
	NoSpooler,

	/// Spawning or feeding the print spooler failed.
	#[error("print spooler I/O error: {0}")]
	SpoolerIo(#[source] std::io::Error),

	/// The print spooler rejected the job.
	#[error("print spooler exited with {0}")]
	PrintFailed(ExitStatus),
}

impl EditorError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

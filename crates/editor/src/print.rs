//! Printing through the system print spooler.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{EditorError, Result};

/// Spoolers tried in order.
const SPOOLERS: [&str; 2] = ["lp", "lpr"];

/// Locates the first available print spooler.
pub fn find_spooler() -> Option<PathBuf> {
	SPOOLERS.iter().find_map(|name| which::which(name).ok())
}

/// Sends `text` to the default printer, naming the job `title`.
pub fn print_text(text: &str, title: &str) -> Result<()> {
	let spooler = find_spooler().ok_or(EditorError::NoSpooler)?;
	print_with(&spooler, text, title)
}

/// Pipes `text` into `spooler` and waits for it to accept the job.
pub fn print_with(spooler: &std::path::Path, text: &str, title: &str) -> Result<()> {
	let is_lp = spooler.file_name().is_some_and(|name| name == "lp");
	let mut command = Command::new(spooler);
	if is_lp {
		command.args(["-t", title]);
	} else {
		command.args(["-J", title]);
	}

	let mut child = command
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.map_err(EditorError::SpoolerIo)?;

	// A spooler that exits early closes the pipe; its exit status decides.
	if let Some(mut stdin) = child.stdin.take()
		&& let Err(error) = stdin.write_all(text.as_bytes())
		&& error.kind() != std::io::ErrorKind::BrokenPipe
	{
		let _ = child.kill();
		let _ = child.wait();
		return Err(EditorError::SpoolerIo(error));
	}

	let status = child.wait().map_err(EditorError::SpoolerIo)?;
	if !status.success() {
		return Err(EditorError::PrintFailed(status));
	}
	info!(spooler = %spooler.display(), bytes = text.len(), "print job submitted");
	Ok(())
}

#[cfg(all(test, unix))]
mod tests {
	use std::path::Path;

	use super::*;

	#[test]
	fn successful_spooler_accepts_job() {
		// `true` ignores its arguments and exits 0.
		let spooler = which::which("true").expect("true is installed");
		assert!(print_with(&spooler, "hello", "doc.txt").is_ok());
	}

	#[test]
	fn failing_spooler_is_reported() {
		let spooler = which::which("false").expect("false is installed");
		let err = print_with(&spooler, "hello", "doc.txt").unwrap_err();
		assert!(matches!(err, EditorError::PrintFailed(_)));
	}

	#[test]
	fn spooler_closing_stdin_early_is_judged_by_status() {
		let spooler = which::which("false").expect("false is installed");
		let text = "x".repeat(1 << 20);
		let err = print_with(&spooler, &text, "big.txt").unwrap_err();
		assert!(matches!(err, EditorError::PrintFailed(_)));
	}

	#[test]
	fn missing_binary_is_io_error() {
		let err = print_with(Path::new("/nonexistent/lp"), "x", "y").unwrap_err();
		assert!(matches!(err, EditorError::SpoolerIo(_)));
	}
}

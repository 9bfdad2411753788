use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Log file location: `$QUILL_LOG_DIR/quill.<pid>.log`, else
/// `<data dir>/quill/quill.log`.
pub fn log_path() -> Option<PathBuf> {
	if let Some(dir) = std::env::var_os("QUILL_LOG_DIR").map(PathBuf::from) {
		return Some(dir.join(format!("quill.{}.log", std::process::id())));
	}
	dirs::data_dir().map(|dir| dir.join("quill").join("quill.log"))
}

fn default_filter(verbose: bool) -> EnvFilter {
	if verbose {
		EnvFilter::new("quill_editor=debug,quill_term=debug,quill_frontend_tui=debug,info")
	} else {
		EnvFilter::new("quill_editor=info,quill_term=info,warn")
	}
}

/// Installs a file logger. The terminal belongs to the UI, so nothing is
/// logged when the log file cannot be opened.
pub fn setup_tracing(verbose: bool) -> Option<PathBuf> {
	let log_path = log_path()?;
	if let Some(parent) = log_path.parent() {
		std::fs::create_dir_all(parent).ok()?;
	}
	let file = OpenOptions::new().create(true).append(true).open(&log_path).ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
	let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);

	tracing_subscriber::registry().with(filter).with(file_layer).init();
	tracing::info!(path = %log_path.display(), "tracing initialized");
	Some(log_path)
}

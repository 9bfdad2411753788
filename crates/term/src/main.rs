mod app;
mod cli;
mod input;
mod logging;
mod terminal;

use std::time::Instant;

use anyhow::Context as _;
use app::App;
use clap::Parser;
use cli::Cli;
use quill_editor::{Clipboard, Dialog, Editor, Settings, Theme};
use terminal::TerminalGuard;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let log_path = logging::setup_tracing(cli.verbose);
	info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "starting quill");

	let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
	if let Some(path) = cli.statistics {
		settings.statistics_file = path;
	}

	let (theme, theme_error) = Theme::resolve(&settings, cli.theme.as_deref());
	let mut editor = Editor::new(settings, theme, Clipboard::system()).context("invalid shortcut configuration")?;
	if let Some(err) = theme_error {
		error!(error = %err, "theme failed to load, using default palette");
		editor.push_dialog(Dialog::error("Theme", err.to_string()));
	}
	if let Some(path) = cli.file {
		editor.open_file(path, Instant::now());
	}

	let runtime = tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.thread_name("quill-worker")
		.build()
		.context("failed to start async runtime")?;

	let mut guard = TerminalGuard::enter().context("failed to initialize terminal")?;
	let mut app = App::new(editor, runtime.handle().clone());
	let result = app.run(&mut guard);
	drop(guard);

	if let Err(err) = &result {
		error!(error = %err, "quill exited with an error");
	}
	runtime.shutdown_background();
	result
}

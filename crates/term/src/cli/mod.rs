use std::path::PathBuf;

use clap::Parser;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A terminal text editor with a typing trainer")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to open (starts with an untitled document if omitted)
	pub file: Option<PathBuf>,

	/// Settings file (defaults to ./settings.json, then the user config dir)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Training statistics file, overriding the settings
	#[arg(long, value_name = "PATH")]
	pub statistics: Option<PathBuf>,

	/// Color theme to use (dark, light)
	#[arg(long, short = 't')]
	pub theme: Option<String>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

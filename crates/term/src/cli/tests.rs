use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn no_arguments_starts_untitled() {
	let cli = Cli::try_parse_from(["quill"]).unwrap();
	assert_eq!(cli.file, None);
	assert_eq!(cli.config, None);
	assert!(!cli.verbose);
}

#[test]
fn parses_file_and_overrides() {
	let cli = Cli::try_parse_from([
		"quill",
		"notes.txt",
		"--config",
		"my.json",
		"--statistics",
		"stats.json",
		"-t",
		"light",
		"-v",
	])
	.unwrap();
	assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
	assert_eq!(cli.config, Some(PathBuf::from("my.json")));
	assert_eq!(cli.statistics, Some(PathBuf::from("stats.json")));
	assert_eq!(cli.theme.as_deref(), Some("light"));
	assert!(cli.verbose);
}

#[test]
fn rejects_unknown_flags() {
	assert!(Cli::try_parse_from(["quill", "--nope"]).is_err());
}

use std::fs;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use quill_editor::dialog::Dialog;
use quill_editor::statistics::{SessionRecord, StatisticsLog};
use quill_editor::Command;
use tempfile::TempDir;

use crate::common::{editor_with_stats, type_str};

#[test]
fn sessions_accumulate_in_statistics_file() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor_with_stats(dir.path());
	let start = Instant::now();

	for round in 0..2u64 {
		editor.paste_text("quick brown fox".into(), start);
		editor.execute(Command::StartTraining, start);
		type_str(&mut editor, "quick brown fox", start + Duration::from_secs(60 * (round + 1)));
		assert!(!editor.is_training());
		editor.dismiss_dialog();
		editor.edit(start, |doc| doc.clear());
	}

	let log = StatisticsLog::open(dir.path().join("training_statistics.json"));
	let elapsed: Vec<u64> = log.records().iter().map(|r| r.elapsed_time).collect();
	assert_eq!(elapsed, vec![60, 120]);
	assert!(log.records().iter().all(|r| r.completed && r.words_typed == 3));

	let raw = fs::read_to_string(dir.path().join("training_statistics.json")).unwrap();
	assert!(raw.starts_with("[\n    {\n        \"completed\": true"), "{raw}");
}

#[test]
fn statistics_dialog_shows_existing_records() {
	let dir = TempDir::new().unwrap();
	let records = vec![
		SessionRecord {
			completed: true,
			words_typed: 12,
			elapsed_time: 30,
			error_count: 2,
			timestamp: 1.0,
		},
		SessionRecord {
			completed: false,
			words_typed: 4,
			elapsed_time: 10,
			error_count: 0,
			timestamp: 2.0,
		},
	];
	fs::write(dir.path().join("training_statistics.json"), serde_json::to_string(&records).unwrap()).unwrap();

	let mut editor = editor_with_stats(dir.path());
	editor.execute(Command::ShowStatistics, Instant::now());
	let Some(Dialog::Statistics(view)) = editor.dialog() else {
		panic!("expected statistics dialog, got {:?}", editor.dialog());
	};
	assert_eq!(view.records, records);
	assert_eq!(view.summary.total_sessions, 2);
	assert_eq!(view.summary.completed_sessions, 1);
	assert_eq!(view.summary.total_words, 16);
	let [words, time, errors] = view.series();
	assert_eq!(words, vec![(1.0, 12.0), (2.0, 4.0)]);
	assert_eq!(time, vec![(1.0, 30.0), (2.0, 10.0)]);
	assert_eq!(errors, vec![(1.0, 2.0), (2.0, 0.0)]);
}

#[test]
fn corrupt_statistics_file_is_treated_as_empty() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("training_statistics.json"), "{ not json").unwrap();

	let mut editor = editor_with_stats(dir.path());
	editor.execute(Command::ShowStatistics, Instant::now());
	match editor.dialog() {
		Some(Dialog::Message { body, .. }) => assert_eq!(body, "No statistics available yet."),
		other => panic!("unexpected dialog {other:?}"),
	}
}

#[test]
fn errors_never_decrease_after_correction() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor_with_stats(dir.path());
	let now = Instant::now();
	editor.paste_text("abc".into(), now);
	editor.execute(Command::StartTraining, now);

	type_str(&mut editor, "xy", now);
	assert_eq!(editor.training().map(|t| t.error_count()), Some(2));
	editor.edit(now, |doc| doc.backspace());
	editor.edit(now, |doc| doc.backspace());
	assert_eq!(editor.training().map(|t| t.current_errors()), Some(0));
	assert_eq!(editor.status().error_label.as_deref(), Some("Errors: 2"));
}

#[test]
fn open_file_normalizes_line_endings() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("crlf.txt");
	fs::write(&path, "one\r\ntwo\r\n").unwrap();

	let mut editor = editor_with_stats(dir.path());
	editor.open_file(path, Instant::now());
	assert_eq!(editor.document().text(), "one\ntwo\n");
	assert_eq!(editor.title(), "crlf.txt - learn to write");
	assert!(!editor.document().is_modified());
	assert_eq!(editor.status().message, "Word Count: 2");
}

//! The headless editor: one document plus the typing trainer, statistics
//! log, dialogs and menu state that frontends render.
//!
//! Frontends feed key presses in as [`Command`]s or document edits and read
//! back the state to draw. Work that must run off the UI thread (fetching a
//! Wikipedia sample) is returned as an [`Effect`] for the frontend to perform;
//! its result comes back through [`Editor::finish_wiki`].

mod dialogs;
mod files;
mod stats;
mod training;

pub use training::fetch_wikipedia;

use std::time::Instant;

use quill_primitives::normalize_to_lf;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::command::{Command, Keymap};
use crate::dialog::{ConfirmAction, Dialog, FindDialog};
use crate::document::Document;
use crate::menu::MenuState;
use crate::settings::{self, Settings};
use crate::statistics::StatisticsLog;
use crate::status::StatusLine;
use crate::theme::Theme;
use crate::training::TrainingSession;
use crate::wiki::PickLimits;

/// Work the frontend must perform on the editor's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	/// Fetch a random featured-article summary and pass the result to
	/// [`Editor::finish_wiki`].
	FetchWikipedia { language: String, limits: PickLimits },
}

/// Editor state shared by every frontend.
#[derive(Debug)]
pub struct Editor {
	document: Document,
	settings: Settings,
	keymap: Keymap,
	theme: Theme,
	statistics: StatisticsLog,
	clipboard: Clipboard,
	training: Option<TrainingSession>,
	status: StatusLine,
	dialogs: Vec<Dialog>,
	/// Last find/replace input, restored when the find dialog reopens.
	find_memory: FindDialog,
	menu: MenuState,
	wrap: bool,
	wiki_pending: bool,
	should_quit: bool,
}

impl Editor {
	/// Creates an editor with an empty untitled document.
	pub fn new(settings: Settings, theme: Theme, clipboard: Clipboard) -> settings::Result<Self> {
		let keymap = Keymap::new(settings.shortcuts.chords()?);
		let statistics = StatisticsLog::open(&settings.statistics_file);
		let mut editor = Self {
			document: Document::scratch(),
			keymap,
			theme,
			statistics,
			clipboard,
			training: None,
			status: StatusLine::default(),
			dialogs: Vec::new(),
			find_memory: FindDialog::default(),
			menu: MenuState::default(),
			wrap: settings.wrap,
			wiki_pending: false,
			should_quit: false,
			settings,
		};
		editor.refresh_status(Instant::now());
		Ok(editor)
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn statistics(&self) -> &StatisticsLog {
		&self.statistics
	}

	pub fn training(&self) -> Option<&TrainingSession> {
		self.training.as_ref()
	}

	pub fn is_training(&self) -> bool {
		self.training.is_some()
	}

	pub fn status(&self) -> &StatusLine {
		&self.status
	}

	pub fn menu(&self) -> &MenuState {
		&self.menu
	}

	pub fn menu_mut(&mut self) -> &mut MenuState {
		&mut self.menu
	}

	pub fn wrap(&self) -> bool {
		self.wrap
	}

	pub fn wiki_pending(&self) -> bool {
		self.wiki_pending
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Window title for the current document.
	pub fn title(&self) -> String {
		self.document.title()
	}

	/// Applies `f` to the document. When the text changes the training
	/// session tracks the new input and the status line refreshes.
	pub fn edit<R>(&mut self, now: Instant, f: impl FnOnce(&mut Document) -> R) -> R {
		let before = self.document.version();
		let result = f(&mut self.document);
		if self.document.version() != before {
			self.text_changed(now);
		}
		result
	}

	/// Periodic timer hook: refreshes the status line.
	pub fn tick(&mut self, now: Instant) {
		self.refresh_status(now);
	}

	/// Runs a command. Returns work the frontend must carry out, if any.
	pub fn execute(&mut self, command: Command, now: Instant) -> Option<Effect> {
		debug!(?command, "execute");
		match command {
			Command::Open => self.prompt_open(),
			Command::Save => self.save(),
			Command::SaveAs => self.prompt_save_as(),
			Command::Print => self.push_dialog(Dialog::confirm(
				"Print",
				format!("Send {} to the default printer?", self.document.display_name()),
				ConfirmAction::Print,
			)),
			Command::Quit => self.request_quit(),
			Command::Undo => {
				self.edit(now, Document::undo);
			}
			Command::Redo => {
				self.edit(now, Document::redo);
			}
			Command::Cut => self.cut(now),
			Command::Copy => self.copy(),
			Command::Paste => self.paste(now),
			Command::SelectAll => self.document.select_all(),
			Command::ToggleWrap => self.wrap = !self.wrap,
			Command::Find => self.open_find(),
			Command::StartTraining => self.start_training(now),
			Command::StopTraining => self.stop_training(false, now),
			Command::WikiTraining => return self.request_wiki(),
			Command::ShowStatistics => self.show_statistics(),
			Command::ClearStatistics => self.push_dialog(Dialog::confirm(
				"Confirm Action",
				"Are you sure you want to clear all statistics?",
				ConfirmAction::ClearStatistics,
			)),
			Command::WordCount => self.refresh_status(now),
		}
		None
	}

	fn cut(&mut self, now: Instant) {
		if let Some(text) = self.edit(now, Document::delete_selection) {
			self.clipboard.set(text);
		}
	}

	fn copy(&mut self) {
		if let Some(text) = self.document.selected_text() {
			self.clipboard.set(text);
		}
	}

	fn paste(&mut self, now: Instant) {
		if let Some(text) = self.clipboard.get() {
			let text = normalize_to_lf(text);
			self.edit(now, |doc| doc.insert_text(&text));
		}
	}

	/// Inserts pasted text from the terminal (bracketed paste).
	pub fn paste_text(&mut self, text: String, now: Instant) {
		let text = normalize_to_lf(text);
		self.edit(now, |doc| doc.insert_text(&text));
	}

	fn request_quit(&mut self) {
		if self.document.is_modified() {
			self.push_dialog(Dialog::confirm(
				"Unsaved Changes",
				format!("{} has unsaved changes. Quit anyway?", self.document.display_name()),
				ConfirmAction::Quit,
			));
		} else {
			self.should_quit = true;
		}
	}

	/// Reacts to a change of the document text.
	fn text_changed(&mut self, now: Instant) {
		if let Some(session) = self.training.as_mut() {
			let input = self.document.text();
			if session.track_input(&input) == crate::training::Progress::Complete {
				self.stop_training(true, now);
				return;
			}
		}
		self.refresh_status(now);
	}

	fn refresh_status(&mut self, now: Instant) {
		let text = self.document.text();
		self.status.refresh(&text, self.training.as_ref(), now);
	}
}

//! Event loop: draws the editor, routes input and drains background results.

use std::time::{Duration, Instant};

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quill_editor::dialog::{Dialog, TextField};
use quill_editor::settings::{ChordKey, KeyChord};
use quill_editor::wiki::{Article, WikiError};
use quill_editor::{Command, Editor, Effect, WikipediaClient, fetch_wikipedia};
use quill_frontend_tui::EditorView;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

use crate::input::{chord, typed_char};
use crate::terminal::TerminalGuard;

/// Upper bound on how long the loop sleeps waiting for input, so background
/// results are picked up promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type WikiResult = Result<Article, WikiError>;

pub struct App {
	editor: Editor,
	view: EditorView,
	runtime: Handle,
	wiki_tx: UnboundedSender<WikiResult>,
	wiki_rx: UnboundedReceiver<WikiResult>,
	refresh_every: Duration,
	last_refresh: Instant,
}

impl App {
	pub fn new(editor: Editor, runtime: Handle) -> Self {
		let (wiki_tx, wiki_rx) = mpsc::unbounded_channel();
		let refresh_every = Duration::from_secs(editor.settings().status_refresh_secs.max(1));
		Self {
			editor,
			view: EditorView::default(),
			runtime,
			wiki_tx,
			wiki_rx,
			refresh_every,
			last_refresh: Instant::now(),
		}
	}

	pub fn run(&mut self, guard: &mut TerminalGuard) -> anyhow::Result<()> {
		info!("event loop started");
		loop {
			guard.set_title(&self.editor.title()).context("failed to set window title")?;
			guard
				.terminal_mut()
				.draw(|frame| quill_frontend_tui::render(&self.editor, &mut self.view, frame))
				.context("failed to draw frame")?;

			if self.editor.should_quit() {
				info!("quit requested");
				return Ok(());
			}

			let until_refresh = self.refresh_every.saturating_sub(self.last_refresh.elapsed());
			if event::poll(until_refresh.min(POLL_INTERVAL)).context("failed to poll terminal events")? {
				let event = event::read().context("failed to read terminal event")?;
				self.handle_event(event);
			}

			while let Ok(result) = self.wiki_rx.try_recv() {
				self.editor.finish_wiki(result, Instant::now());
			}

			if self.last_refresh.elapsed() >= self.refresh_every {
				let now = Instant::now();
				self.editor.tick(now);
				self.last_refresh = now;
			}
		}
	}

	fn handle_event(&mut self, event: Event) {
		match event {
			Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
			Event::Paste(text) => self.handle_paste(text),
			_ => {}
		}
	}

	fn handle_paste(&mut self, text: String) {
		match self.editor.dialog_mut() {
			Some(Dialog::Prompt { field, .. }) => field.insert_str(&text),
			Some(Dialog::Find(find)) => find.focused_mut().insert_str(&text),
			Some(_) => {}
			None => self.editor.paste_text(text, Instant::now()),
		}
	}

	fn handle_key(&mut self, key: KeyEvent) {
		if self.editor.has_dialog() {
			self.handle_dialog_key(key);
			return;
		}
		if self.editor.menu().is_open() {
			self.handle_menu_key(key);
			return;
		}

		let Some(chord) = chord(&key) else {
			return;
		};
		if chord == KeyChord::function(10) {
			self.editor.menu_mut().open(0);
			return;
		}
		if let (true, false, ChordKey::Char(letter)) = (chord.alt, chord.ctrl, chord.key)
			&& self.editor.menu_mut().open_hotkey(letter)
		{
			return;
		}
		if let Some(command) = self.editor.keymap().lookup(&chord) {
			self.run_command(command);
			return;
		}
		self.handle_edit_key(key, chord);
	}

	fn run_command(&mut self, command: Command) {
		if let Some(effect) = self.editor.execute(command, Instant::now()) {
			self.perform(effect);
		}
	}

	fn perform(&mut self, effect: Effect) {
		match effect {
			Effect::FetchWikipedia { language, limits } => {
				debug!(%language, ?limits, "spawning wikipedia fetch");
				let tx = self.wiki_tx.clone();
				self.runtime.spawn(async move {
					let result = match WikipediaClient::new(&language) {
						Ok(client) => fetch_wikipedia(&client, limits).await,
						Err(err) => Err(err),
					};
					if tx.send(result).is_err() {
						warn!("wikipedia result dropped: event loop has exited");
					}
				});
			}
		}
	}

	fn handle_edit_key(&mut self, key: KeyEvent, chord: KeyChord) {
		let now = Instant::now();
		let extend = chord.shift;
		let page = self.view.page_rows();

		if let Some(ch) = typed_char(&key) {
			self.editor.edit(now, |doc| doc.insert_char(ch));
			return;
		}

		match (chord.ctrl, chord.key) {
			(_, ChordKey::Enter) => self.editor.edit(now, |doc| doc.insert_text("\n")),
			(_, ChordKey::Tab) if !chord.shift => self.editor.edit(now, |doc| doc.insert_char('\t')),
			(_, ChordKey::Backspace) => self.editor.edit(now, |doc| doc.backspace()),
			(_, ChordKey::Delete) => self.editor.edit(now, |doc| doc.delete_forward()),
			(_, ChordKey::Left) => self.editor.edit(now, |doc| doc.move_left(extend)),
			(_, ChordKey::Right) => self.editor.edit(now, |doc| doc.move_right(extend)),
			(_, ChordKey::Up) => self.editor.edit(now, |doc| doc.move_up(1, extend)),
			(_, ChordKey::Down) => self.editor.edit(now, |doc| doc.move_down(1, extend)),
			(_, ChordKey::PageUp) => self.editor.edit(now, |doc| doc.move_up(page, extend)),
			(_, ChordKey::PageDown) => self.editor.edit(now, |doc| doc.move_down(page, extend)),
			(true, ChordKey::Home) => self.editor.edit(now, |doc| doc.move_document_start(extend)),
			(true, ChordKey::End) => self.editor.edit(now, |doc| doc.move_document_end(extend)),
			(false, ChordKey::Home) => self.editor.edit(now, |doc| doc.move_line_start(extend)),
			(false, ChordKey::End) => self.editor.edit(now, |doc| doc.move_line_end(extend)),
			_ => {}
		}
	}

	fn handle_menu_key(&mut self, key: KeyEvent) {
		let menu = self.editor.menu_mut();
		match key.code {
			KeyCode::Esc | KeyCode::F(10) => menu.close(),
			KeyCode::Left => menu.prev_menu(),
			KeyCode::Right => menu.next_menu(),
			KeyCode::Up => menu.prev_item(),
			KeyCode::Down => menu.next_item(),
			KeyCode::Enter => {
				if let Some(command) = menu.activate() {
					self.run_command(command);
				}
			}
			KeyCode::Char(letter) if key.modifiers.contains(KeyModifiers::ALT) => {
				menu.open_hotkey(letter);
			}
			_ => {}
		}
	}

	fn handle_dialog_key(&mut self, key: KeyEvent) {
		let now = Instant::now();
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let Some(dialog) = self.editor.dialog_mut() else {
			return;
		};

		match dialog {
			Dialog::Message { .. } | Dialog::Statistics(_) => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
					self.editor.dismiss_dialog();
				}
			}
			Dialog::Confirm { yes_selected, .. } => match key.code {
				KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => *yes_selected = !*yes_selected,
				KeyCode::Char('y' | 'Y') => self.editor.answer_confirm(true, now),
				KeyCode::Char('n' | 'N') => self.editor.answer_confirm(false, now),
				KeyCode::Enter => self.editor.submit_dialog(now),
				KeyCode::Esc => self.editor.dismiss_dialog(),
				_ => {}
			},
			Dialog::Prompt { field, .. } => match key.code {
				KeyCode::Enter => self.editor.submit_dialog(now),
				KeyCode::Esc => self.editor.dismiss_dialog(),
				_ => edit_field(field, &key),
			},
			Dialog::Find(find) => match key.code {
				KeyCode::Enter => self.editor.submit_dialog(now),
				KeyCode::Esc => self.editor.dismiss_dialog(),
				KeyCode::Tab | KeyCode::BackTab => find.toggle_focus(),
				KeyCode::Char('r') if ctrl => self.editor.replace_next(now),
				_ => edit_field(find.focused_mut(), &key),
			},
		}
	}
}

/// Applies a line-editing key to a dialog text field.
fn edit_field(field: &mut TextField, key: &KeyEvent) {
	if let Some(ch) = typed_char(key) {
		field.insert(ch);
		return;
	}
	match key.code {
		KeyCode::Backspace => field.backspace(),
		KeyCode::Delete => field.delete(),
		KeyCode::Left => field.left(),
		KeyCode::Right => field.right(),
		KeyCode::Home => field.home(),
		KeyCode::End => field.end(),
		_ => {}
	}
}

//! Menu bar model: menu layout plus open/highlight state.

use crate::command::Command;

/// One row of a drop-down menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
	Action(Command),
	Separator,
}

/// A top-level menu.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
	pub title: &'static str,
	/// Letter that opens the menu together with Alt.
	pub hotkey: char,
	pub items: &'static [MenuItem],
}

use MenuItem::{Action, Separator};

/// Menu bar layout.
pub const MENUS: &[Menu] = &[
	Menu {
		title: "File",
		hotkey: 'f',
		items: &[
			Action(Command::Open),
			Action(Command::Save),
			Action(Command::SaveAs),
			Action(Command::Print),
			Separator,
			Action(Command::Quit),
		],
	},
	Menu {
		title: "Edit",
		hotkey: 'e',
		items: &[
			Action(Command::Undo),
			Action(Command::Redo),
			Separator,
			Action(Command::Cut),
			Action(Command::Copy),
			Action(Command::Paste),
			Action(Command::SelectAll),
			Action(Command::ToggleWrap),
			Action(Command::Find),
		],
	},
	Menu {
		title: "Training",
		hotkey: 't',
		items: &[
			Action(Command::StartTraining),
			Action(Command::StopTraining),
			Action(Command::WikiTraining),
			Separator,
			Action(Command::ShowStatistics),
			Action(Command::ClearStatistics),
		],
	},
	Menu {
		title: "View",
		hotkey: 'v',
		items: &[Action(Command::WordCount)],
	},
];

/// Which menu is open and which entry is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
	open: Option<usize>,
	selected: usize,
}

impl MenuState {
	pub fn is_open(&self) -> bool {
		self.open.is_some()
	}

	pub fn open_index(&self) -> Option<usize> {
		self.open
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	/// Opens the menu at `index` with its first action highlighted.
	pub fn open(&mut self, index: usize) {
		if index < MENUS.len() {
			self.open = Some(index);
			self.selected = first_action(MENUS[index].items, 0, 1);
		}
	}

	/// Opens the menu whose hotkey is `key`. Returns whether one matched.
	pub fn open_hotkey(&mut self, key: char) -> bool {
		let key = key.to_ascii_lowercase();
		match MENUS.iter().position(|menu| menu.hotkey == key) {
			Some(index) => {
				self.open(index);
				true
			}
			None => false,
		}
	}

	pub fn close(&mut self) {
		self.open = None;
		self.selected = 0;
	}

	pub fn next_menu(&mut self) {
		if let Some(index) = self.open {
			self.open((index + 1) % MENUS.len());
		}
	}

	pub fn prev_menu(&mut self) {
		if let Some(index) = self.open {
			self.open((index + MENUS.len() - 1) % MENUS.len());
		}
	}

	pub fn next_item(&mut self) {
		self.step(1);
	}

	pub fn prev_item(&mut self) {
		self.step(-1);
	}

	/// Command under the highlight, if a menu is open.
	pub fn highlighted(&self) -> Option<Command> {
		let items = MENUS.get(self.open?)?.items;
		match items.get(self.selected)? {
			MenuItem::Action(command) => Some(*command),
			MenuItem::Separator => None,
		}
	}

	/// Closes the menu and returns the highlighted command.
	pub fn activate(&mut self) -> Option<Command> {
		let command = self.highlighted();
		self.close();
		command
	}

	fn step(&mut self, delta: isize) {
		let Some(index) = self.open else { return };
		let items = MENUS[index].items;
		let len = items.len() as isize;
		let start = (self.selected as isize + delta).rem_euclid(len) as usize;
		self.selected = first_action(items, start, delta);
	}
}

/// First non-separator index at or after `start`, walking by `delta` and wrapping.
fn first_action(items: &[MenuItem], start: usize, delta: isize) -> usize {
	let len = items.len() as isize;
	let mut idx = start as isize;
	for _ in 0..len {
		if matches!(items[idx as usize], MenuItem::Action(_)) {
			return idx as usize;
		}
		idx = (idx + delta).rem_euclid(len);
	}
	start
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hotkey_opens_menu_on_first_item() {
		let mut state = MenuState::default();
		assert!(state.open_hotkey('E'));
		assert_eq!(state.highlighted(), Some(Command::Undo));
		assert!(!state.open_hotkey('x'));
	}

	#[test]
	fn navigation_skips_separators() {
		let mut state = MenuState::default();
		state.open(1);
		state.next_item();
		assert_eq!(state.highlighted(), Some(Command::Redo));
		state.next_item();
		assert_eq!(state.highlighted(), Some(Command::Cut));
		state.prev_item();
		assert_eq!(state.highlighted(), Some(Command::Redo));
	}

	#[test]
	fn navigation_wraps() {
		let mut state = MenuState::default();
		state.open(0);
		state.prev_item();
		assert_eq!(state.highlighted(), Some(Command::Quit));
		state.next_item();
		assert_eq!(state.highlighted(), Some(Command::Open));
	}

	#[test]
	fn switching_menus_wraps() {
		let mut state = MenuState::default();
		state.open(0);
		state.prev_menu();
		assert_eq!(state.open_index(), Some(MENUS.len() - 1));
		state.next_menu();
		assert_eq!(state.open_index(), Some(0));
	}

	#[test]
	fn activate_closes() {
		let mut state = MenuState::default();
		state.open_hotkey('v');
		assert_eq!(state.activate(), Some(Command::WordCount));
		assert!(!state.is_open());
	}

	#[test]
	fn every_command_is_in_a_menu() {
		let reachable: Vec<Command> = MENUS
			.iter()
			.flat_map(|menu| menu.items.iter())
			.filter_map(|item| match item {
				MenuItem::Action(command) => Some(*command),
				MenuItem::Separator => None,
			})
			.collect();
		assert_eq!(reachable.len(), 19);
	}
}

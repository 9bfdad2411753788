use tracing::{info, warn};

use super::Editor;
use crate::dialog::{Dialog, StatisticsView};

impl Editor {
	pub(super) fn show_statistics(&mut self) {
		self.statistics.reload();
		if self.statistics.is_empty() {
			self.push_dialog(Dialog::info("Statistics", "No statistics available yet."));
			return;
		}
		self.push_dialog(Dialog::Statistics(StatisticsView {
			records: self.statistics.records().to_vec(),
			summary: self.statistics.summary(),
		}));
	}

	pub(super) fn clear_statistics(&mut self) {
		match self.statistics.clear() {
			Ok(()) => {
				info!(path = %self.statistics.path().display(), "statistics cleared");
				self.push_dialog(Dialog::info("Statistics", "Statistics cleared successfully."));
			}
			Err(err) => {
				warn!(error = %err, "failed to clear statistics");
				self.push_dialog(Dialog::error("Error", format!("Failed to clear statistics: {err}")));
			}
		}
	}
}

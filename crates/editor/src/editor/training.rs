use std::time::Instant;

use rand::SeedableRng as _;
use rand::rngs::StdRng;
use tracing::{info, warn};

use super::{Editor, Effect};
use crate::dialog::Dialog;
use crate::statistics::SessionRecord;
use crate::training::{TrainingError, TrainingSession};
use crate::wiki::{self, Article, ArticleSource, PickLimits, WikiError};

impl Editor {
	/// Takes the document text as the sample and clears the editor for
	/// typing.
	pub(super) fn start_training(&mut self, now: Instant) {
		if self.training.is_some() {
			self.stop_training(false, now);
		}

		let text = self.document.text();
		match TrainingSession::start(&text, self.settings.training.max_chars, now) {
			Ok(session) => {
				self.document.reset();
				self.training = Some(session);
				self.refresh_status(now);
			}
			Err(err) => {
				warn!(error = %err, "training not started");
				self.push_dialog(Dialog::warning(err.title(), err.to_string()));
			}
		}
	}

	/// Ends the active session, records it and restores the sample text.
	pub(super) fn stop_training(&mut self, completed: bool, now: Instant) {
		let Some(session) = self.training.take() else {
			let err = TrainingError::NotStarted;
			self.push_dialog(Dialog::warning(err.title(), err.to_string()));
			return;
		};

		let input = self.document.text();
		let sample = session.sample().to_owned();
		let report = session.finish(&input, completed, now);

		self.document.replace_all(&sample);
		self.refresh_status(now);

		if let Err(err) = self.statistics.append(SessionRecord::from_report(&report)) {
			warn!(error = %err, "failed to record session");
			self.push_dialog(Dialog::error("Statistics", err.to_string()));
		}
		self.push_dialog(Dialog::info(report.title(), report.message()));
	}

	pub(super) fn request_wiki(&mut self) -> Option<Effect> {
		if self.wiki_pending {
			self.status.flash("Wikipedia article is already loading...");
			return None;
		}
		self.wiki_pending = true;
		self.status.flash("Loading Wikipedia article...");
		Some(Effect::FetchWikipedia {
			language: self.settings.wikipedia.language.clone(),
			limits: PickLimits::from(&self.settings.wikipedia),
		})
	}

	/// Receives the outcome of an [`Effect::FetchWikipedia`].
	pub fn finish_wiki(&mut self, result: Result<Article, WikiError>, now: Instant) {
		self.wiki_pending = false;
		match result {
			Ok(article) => {
				info!(title = %article.title, url = %article.url, "wikipedia article loaded");
				self.edit(now, |doc| doc.replace_all(&article.summary));
				self.status.flash(format!("Loaded text from: {}", article.url));
			}
			Err(err) => {
				warn!(error = %err, "wikipedia fetch failed");
				self.push_dialog(Dialog::warning("Error", format!("Failed to load text from Wikipedia: {err}")));
			}
		}
	}
}

/// Runs an [`Effect::FetchWikipedia`] against `source` with a fresh RNG.
pub async fn fetch_wikipedia<S>(source: &S, limits: PickLimits) -> Result<Article, WikiError>
where
	S: ArticleSource + ?Sized,
{
	let mut rng = StdRng::from_os_rng();
	wiki::pick_article(source, &mut rng, limits).await
}

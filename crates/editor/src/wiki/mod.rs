//! Training samples from random Wikipedia featured articles.
//!
//! [`pick_article`] draws a random title from the featured-article list and
//! keeps drawing until it finds a plain article whose summary fits the word
//! limit. Network access sits behind [`ArticleSource`] so the selection loop
//! can be exercised without a network.

mod client;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use quill_primitives::word_count;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::debug;

pub use client::WikipediaClient;

use crate::settings::WikipediaSettings;

/// Errors raised while fetching a sample from Wikipedia.
#[derive(Debug, Error)]
pub enum WikiError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("invalid request URL: {0}")]
	Url(#[from] url::ParseError),

	#[error("the featured articles list is empty")]
	NoFeaturedArticles,

	#[error("no featured article with a summary of at most {max_words} words after {attempts} attempts")]
	NoSuitableArticle { max_words: usize, attempts: usize },
}

/// A fetched article summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
	pub title: String,
	pub summary: String,
	pub url: String,
}

/// Result of looking up a single title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLookup {
	Found(Article),
	/// The title is a disambiguation page.
	Disambiguation,
	/// No page exists under the title.
	Missing,
}

/// Source of featured-article titles and summaries.
#[async_trait]
pub trait ArticleSource: Send + Sync {
	/// Titles of all featured articles.
	async fn featured_titles(&self) -> Result<Vec<String>, WikiError>;

	/// Plain-text summary of the article at `title`.
	async fn summary(&self, title: &str) -> Result<SummaryLookup, WikiError>;
}

/// Limits for [`pick_article`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickLimits {
	pub max_words: usize,
	pub max_attempts: usize,
}

impl From<&WikipediaSettings> for PickLimits {
	fn from(settings: &WikipediaSettings) -> Self {
		Self {
			max_words: settings.max_words,
			max_attempts: settings.max_attempts.max(1),
		}
	}
}

/// Picks a random featured article whose summary has at most
/// `limits.max_words` words.
///
/// Disambiguation pages, missing pages and over-long summaries are skipped.
/// Transport errors abort immediately.
pub async fn pick_article<S, R>(source: &S, rng: &mut R, limits: PickLimits) -> Result<Article, WikiError>
where
	S: ArticleSource + ?Sized,
	R: Rng + Send,
{
	let titles = source.featured_titles().await?;
	debug!(count = titles.len(), "featured titles fetched");

	for attempt in 1..=limits.max_attempts {
		let title = titles.choose(rng).ok_or(WikiError::NoFeaturedArticles)?;
		debug!(attempt, %title, "selected article title");

		match source.summary(title).await? {
			SummaryLookup::Found(article) if word_count(&article.summary) <= limits.max_words => {
				debug!(title = %article.title, url = %article.url, "article fits word limit");
				return Ok(article);
			}
			SummaryLookup::Found(article) => {
				debug!(title = %article.title, words = word_count(&article.summary), "summary too long");
			}
			SummaryLookup::Disambiguation => debug!(%title, "skipping disambiguation page"),
			SummaryLookup::Missing => debug!(%title, "skipping missing page"),
		}
	}

	Err(WikiError::NoSuitableArticle {
		max_words: limits.max_words,
		attempts: limits.max_attempts,
	})
}

use std::time::Instant;

use async_trait::async_trait;
use quill_editor::wiki::{Article, ArticleSource, SummaryLookup, WikiError};
use quill_editor::{Command, Effect, fetch_wikipedia};
use tempfile::TempDir;

use crate::common::editor_with_stats;

struct OneArticle;

#[async_trait]
impl ArticleSource for OneArticle {
	async fn featured_titles(&self) -> Result<Vec<String>, WikiError> {
		Ok(vec!["Ada Lovelace".into()])
	}

	async fn summary(&self, title: &str) -> Result<SummaryLookup, WikiError> {
		Ok(SummaryLookup::Found(Article {
			title: title.into(),
			summary: "Ada Lovelace was an English mathematician.".into(),
			url: "https://en.wikipedia.org/wiki/Ada_Lovelace".into(),
		}))
	}
}

#[test]
fn fetched_article_becomes_training_sample() {
	let dir = TempDir::new().unwrap();
	let mut editor = editor_with_stats(dir.path());
	let now = Instant::now();

	let Some(Effect::FetchWikipedia { limits, .. }) = editor.execute(Command::WikiTraining, now) else {
		panic!("expected a fetch effect");
	};
	let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
	let result = runtime.block_on(fetch_wikipedia(&OneArticle, limits));
	editor.finish_wiki(result, now);

	assert_eq!(editor.document().text(), "Ada Lovelace was an English mathematician.");
	editor.execute(Command::StartTraining, now);
	assert_eq!(editor.training().map(|t| t.sample()), Some("Ada Lovelace was an English mathematician."));
	assert_eq!(editor.status().message, "Words left: 6 | Time: 0:00");
}

use std::collections::HashMap;
use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[derive(Default)]
struct FakeSource {
	titles: Vec<String>,
	pages: HashMap<String, SummaryLookup>,
	lookups: Mutex<Vec<String>>,
}

impl FakeSource {
	fn with_page(mut self, title: &str, lookup: SummaryLookup) -> Self {
		self.titles.push(title.to_string());
		self.pages.insert(title.to_string(), lookup);
		self
	}
}

#[async_trait]
impl ArticleSource for FakeSource {
	async fn featured_titles(&self) -> Result<Vec<String>, WikiError> {
		Ok(self.titles.clone())
	}

	async fn summary(&self, title: &str) -> Result<SummaryLookup, WikiError> {
		if let Ok(mut lookups) = self.lookups.lock() {
			lookups.push(title.to_string());
		}
		Ok(self.pages.get(title).cloned().unwrap_or(SummaryLookup::Missing))
	}
}

fn article(title: &str, summary: &str) -> SummaryLookup {
	SummaryLookup::Found(Article {
		title: title.to_string(),
		summary: summary.to_string(),
		url: format!("https://en.wikipedia.org/wiki/{title}"),
	})
}

fn limits(max_words: usize, max_attempts: usize) -> PickLimits {
	PickLimits { max_words, max_attempts }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
	tokio::runtime::Builder::new_current_thread()
		.build()
		.expect("runtime")
		.block_on(future)
}

#[test]
fn returns_short_article() {
	let source = FakeSource::default().with_page("Moon", article("Moon", "The Moon orbits Earth."));
	let mut rng = StdRng::seed_from_u64(7);

	let picked = block_on(pick_article(&source, &mut rng, limits(200, 5))).expect("article");
	assert_eq!(picked.title, "Moon");
	assert_eq!(picked.url, "https://en.wikipedia.org/wiki/Moon");
}

#[test]
fn skips_disambiguation_missing_and_long_pages() {
	let source = FakeSource::default()
		.with_page("Mercury", SummaryLookup::Disambiguation)
		.with_page("Ghost", SummaryLookup::Missing)
		.with_page("Epic", article("Epic", "word word word word word"))
		.with_page("Haiku", article("Haiku", "an old silent pond"));
	let mut rng = StdRng::seed_from_u64(1);

	let picked = block_on(pick_article(&source, &mut rng, limits(4, 200))).expect("article");
	assert_eq!(picked.title, "Haiku");

	let lookups = source.lookups.lock().expect("lock");
	assert!(lookups.iter().all(|title| ["Mercury", "Ghost", "Epic", "Haiku"].contains(&title.as_str())));
	assert_eq!(lookups.last().map(String::as_str), Some("Haiku"));
}

#[test]
fn gives_up_after_max_attempts() {
	let source = FakeSource::default().with_page("Epic", article("Epic", "far too many words here"));
	let mut rng = StdRng::seed_from_u64(3);

	let err = block_on(pick_article(&source, &mut rng, limits(2, 4))).unwrap_err();
	assert!(matches!(err, WikiError::NoSuitableArticle { max_words: 2, attempts: 4 }));
	assert_eq!(source.lookups.lock().expect("lock").len(), 4);
}

#[test]
fn empty_featured_list_is_an_error() {
	let source = FakeSource::default();
	let mut rng = StdRng::seed_from_u64(0);

	let err = block_on(pick_article(&source, &mut rng, limits(200, 3))).unwrap_err();
	assert!(matches!(err, WikiError::NoFeaturedArticles));
}

#[test]
fn limits_from_settings_need_one_attempt() {
	let settings = WikipediaSettings {
		max_attempts: 0,
		..WikipediaSettings::default()
	};
	assert_eq!(PickLimits::from(&settings), limits(200, 1));
}

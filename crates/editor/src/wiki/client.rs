use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{Article, ArticleSource, SummaryLookup, WikiError};

/// Page listing every featured article.
const FEATURED_PAGE: &str = "Wikipedia:Featured articles";

const USER_AGENT: &str = concat!("quill/", env!("CARGO_PKG_VERSION"), " (typing trainer)");

/// [`ArticleSource`] backed by the MediaWiki action API and the REST summary
/// endpoint of one language edition.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
	http: Client,
	base: Url,
}

impl WikipediaClient {
	/// Creates a client for `https://<language>.wikipedia.org`.
	pub fn new(language: &str) -> Result<Self, WikiError> {
		let base = Url::parse(&format!("https://{language}.wikipedia.org/"))?;
		Self::with_base(base)
	}

	/// Creates a client against an arbitrary MediaWiki host.
	pub fn with_base(base: Url) -> Result<Self, WikiError> {
		let http = Client::builder().user_agent(USER_AGENT).build()?;
		Ok(Self { http, base })
	}

	fn summary_url(&self, title: &str) -> Result<Url, WikiError> {
		let mut url = self.base.join("api/rest_v1/page/summary/")?;
		url.path_segments_mut()
			.map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
			.pop_if_empty()
			.push(&title.replace(' ', "_"));
		Ok(url)
	}
}

#[derive(Debug, Deserialize)]
struct LinksResponse {
	#[serde(default)]
	query: Option<LinksQuery>,
	#[serde(rename = "continue", default)]
	cont: Option<LinksContinue>,
}

#[derive(Debug, Deserialize)]
struct LinksQuery {
	#[serde(default)]
	pages: Vec<LinksPage>,
}

#[derive(Debug, Deserialize)]
struct LinksPage {
	#[serde(default)]
	links: Vec<PageLink>,
}

#[derive(Debug, Deserialize)]
struct PageLink {
	title: String,
}

#[derive(Debug, Deserialize)]
struct LinksContinue {
	plcontinue: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
	#[serde(rename = "type", default)]
	kind: String,
	title: String,
	#[serde(default)]
	extract: String,
	#[serde(default)]
	content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
	desktop: DesktopUrls,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
	page: String,
}

#[async_trait]
impl ArticleSource for WikipediaClient {
	async fn featured_titles(&self) -> Result<Vec<String>, WikiError> {
		let api = self.base.join("w/api.php")?;
		let mut titles = Vec::new();
		let mut cursor: Option<String> = None;

		loop {
			let mut request = self.http.get(api.clone()).query(&[
				("action", "query"),
				("format", "json"),
				("formatversion", "2"),
				("prop", "links"),
				("titles", FEATURED_PAGE),
				("plnamespace", "0"),
				("pllimit", "max"),
			]);
			if let Some(token) = cursor.as_deref() {
				request = request.query(&[("plcontinue", token)]);
			}

			let response: LinksResponse = request.send().await?.error_for_status()?.json().await?;
			titles.extend(
				response
					.query
					.into_iter()
					.flat_map(|query| query.pages)
					.flat_map(|page| page.links)
					.map(|link| link.title),
			);

			match response.cont {
				Some(next) => cursor = Some(next.plcontinue),
				None => break,
			}
		}

		debug!(count = titles.len(), "featured article list fetched");
		Ok(titles)
	}

	async fn summary(&self, title: &str) -> Result<SummaryLookup, WikiError> {
		let url = self.summary_url(title)?;
		let response = self.http.get(url.clone()).send().await?;
		if response.status() == StatusCode::NOT_FOUND {
			return Ok(SummaryLookup::Missing);
		}

		let body: SummaryResponse = response.error_for_status()?.json().await?;
		if body.kind == "disambiguation" {
			return Ok(SummaryLookup::Disambiguation);
		}

		let page_url = body.content_urls.map(|urls| urls.desktop.page).unwrap_or_else(|| url.to_string());
		Ok(SummaryLookup::Found(Article {
			title: body.title,
			summary: body.extract,
			url: page_url,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_url_encodes_title() {
		let client = WikipediaClient::new("en").expect("client");
		let url = client.summary_url("Ada Lovelace/Notes?").expect("url");
		assert_eq!(url.as_str(), "https://en.wikipedia.org/api/rest_v1/page/summary/Ada_Lovelace%2FNotes%3F");
	}

	#[test]
	fn links_response_with_continuation() {
		let raw = r#"{
			"continue": {"plcontinue": "123|0|Foo", "continue": "||"},
			"query": {"pages": [{"pageid": 1, "ns": 4, "title": "Wikipedia:Featured articles",
				"links": [{"ns": 0, "title": "Apollo 11"}, {"ns": 0, "title": "Zebra"}]}]}
		}"#;
		let parsed: LinksResponse = serde_json::from_str(raw).expect("parse");
		assert_eq!(parsed.cont.map(|c| c.plcontinue).as_deref(), Some("123|0|Foo"));
		let titles: Vec<String> = parsed
			.query
			.into_iter()
			.flat_map(|q| q.pages)
			.flat_map(|p| p.links)
			.map(|l| l.title)
			.collect();
		assert_eq!(titles, vec!["Apollo 11", "Zebra"]);
	}

	#[test]
	fn summary_response_shape() {
		let raw = r#"{"type": "standard", "title": "Apollo 11", "extract": "Apollo 11 was a spaceflight.",
			"content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Apollo_11"}}}"#;
		let parsed: SummaryResponse = serde_json::from_str(raw).expect("parse");
		assert_eq!(parsed.kind, "standard");
		assert_eq!(parsed.content_urls.map(|u| u.desktop.page).as_deref(), Some("https://en.wikipedia.org/wiki/Apollo_11"));
	}
}

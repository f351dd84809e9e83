use crate::error::{Result, SearchError};
use crate::result::Article;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// MediaWiki Action API response envelope. Only the fields the search
/// needs are modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "continue")]
    continuation: Option<Continuation>,
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Continuation {
    plcontinue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Query {
    pages: HashMap<String, Page>,
}

/// A single page entry. Missing pages carry the "-1" key and have
/// neither an extract nor links.
#[derive(Debug, Deserialize)]
struct Page {
    extract: Option<String>,
    links: Option<Vec<Link>>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

fn first_page(query: Option<Query>) -> Option<Page> {
    query.and_then(|q| q.pages.into_values().next())
}

/// Client for the MediaWiki Action API.
///
/// Fetches one article at a time: plain-text extract plus the full
/// outgoing link list, following `plcontinue` pagination until the
/// server stops returning a token.
pub struct ArticleFetcher {
    client: Client,
    api_url: String,
}

impl ArticleFetcher {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_timeout(api_url, 10)
    }

    pub fn with_timeout(api_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Wikihop/0.1 (https://github.com/trapdoorsec/wikihop)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Fetch an article's text and complete link list.
    ///
    /// The title goes to the API verbatim; no normalization happens here.
    /// Content comes from the first response only, continuation responses
    /// carry further link batches. A title that resolves to no page
    /// yields an article with empty content, not an error.
    pub async fn fetch_article(&self, title: &str) -> Result<Article> {
        debug!("Fetching article '{}'", title);

        let first = self
            .query(title, &[("prop", "extracts|links"), ("explaintext", "1")])
            .await?;

        let mut article = Article::new(title.to_string());
        let ApiResponse { continuation, query } = first;
        let mut continuation = continuation.and_then(|c| c.plcontinue);

        if let Some(page) = first_page(query) {
            article.content = page.extract.unwrap_or_default();
            article
                .links
                .extend(page.links.unwrap_or_default().into_iter().map(|l| l.title));
        }

        while let Some(token) = continuation {
            debug!("Following link continuation for '{}'", title);
            let next = self
                .query(title, &[("prop", "links"), ("plcontinue", token.as_str())])
                .await?;

            continuation = next.continuation.and_then(|c| c.plcontinue);
            if let Some(page) = first_page(next.query) {
                article
                    .links
                    .extend(page.links.unwrap_or_default().into_iter().map(|l| l.title));
            }
        }

        debug!(
            "Fetched '{}': {} chars of text, {} links",
            title,
            article.content.len(),
            article.links.len()
        );

        Ok(article)
    }

    async fn query(&self, title: &str, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", title),
                ("pllimit", "max"),
            ])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::MalformedResponse {
            title: title.to_string(),
            reason: e.to_string(),
        })
    }
}

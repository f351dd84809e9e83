use crate::error::Result;
use crate::fetcher::ArticleFetcher;
use crate::matcher::WordMatcher;
use crate::result::SearchOutcome;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Breadth-first search over the article link graph.
///
/// Articles are fetched one at a time, in FIFO order, until one of them
/// contains the target word as a whole word or the depth bound exhausts
/// the frontier. The start article counts as distance 1.
pub struct DistanceSearch {
    fetcher: ArticleFetcher,
    max_depth: usize,
    progress_callback: Option<ProgressCallback>,
}

impl DistanceSearch {
    pub fn new(fetcher: ArticleFetcher) -> Self {
        Self {
            fetcher,
            max_depth: DEFAULT_MAX_DEPTH,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Run the search from `start_title` until an article body contains
    /// `target_word`, returning the distance at which it was found.
    ///
    /// Fetch failures and nonexistent pages abandon that branch only;
    /// the search keeps draining the frontier and reports not-found if
    /// nothing else matches.
    pub async fn run(&self, start_title: &str, target_word: &str) -> Result<SearchOutcome> {
        info!(
            "Searching for '{}' from '{}' (max depth {})",
            target_word, start_title, self.max_depth
        );

        let matcher = WordMatcher::new(target_word)?;
        let started = Instant::now();

        let mut queue: VecDeque<(String, usize)> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut articles_processed = 0usize;

        queue.push_back((start_title.to_string(), 1));

        while let Some((title, distance)) = queue.pop_front() {
            // Sole dedup point. Duplicates of this title may still sit
            // further back in the queue; they get dropped here too.
            if visited.contains(&title) {
                continue;
            }
            visited.insert(title.clone());
            articles_processed += 1;

            if let Some(ref callback) = self.progress_callback {
                callback(distance, title.clone());
            }

            let article = match self.fetcher.fetch_article(&title).await {
                Ok(article) => article,
                Err(e) => {
                    warn!("Fetch failed for '{}': {}", title, e);
                    continue;
                }
            };

            if !article.has_content() {
                debug!("Article '{}' has no content, abandoning branch", title);
                continue;
            }

            if matcher.is_match(&article.content) {
                info!(
                    "Found '{}' in '{}' at distance {}",
                    target_word, title, distance
                );
                return Ok(self.outcome(
                    start_title,
                    target_word,
                    Some(distance),
                    articles_processed,
                    started,
                ));
            }

            if distance < self.max_depth {
                debug!(
                    "Queueing {} links from '{}' at distance {}",
                    article.links.len(),
                    title,
                    distance + 1
                );
                for link in article.links {
                    if !visited.contains(&link) {
                        queue.push_back((link, distance + 1));
                    }
                }
            } else {
                debug!("Max depth reached at '{}', not expanding", title);
            }
        }

        info!(
            "'{}' not found within {} hops of '{}' ({} articles processed)",
            target_word, self.max_depth, start_title, articles_processed
        );
        Ok(self.outcome(start_title, target_word, None, articles_processed, started))
    }

    fn outcome(
        &self,
        start_title: &str,
        target_word: &str,
        distance: Option<usize>,
        articles_processed: usize,
        started: Instant,
    ) -> SearchOutcome {
        SearchOutcome {
            start_title: start_title.to_string(),
            target_word: target_word.to_string(),
            distance,
            articles_processed,
            max_depth: self.max_depth,
            elapsed: started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn api_url(server: &MockServer) -> String {
        format!("{}/w/api.php", server.uri())
    }

    fn article_body(title: &str, extract: &str, links: &[&str]) -> serde_json::Value {
        let links_json: Vec<serde_json::Value> = links
            .iter()
            .map(|t| serde_json::json!({"ns": 0, "title": t}))
            .collect();
        serde_json::json!({
            "batchcomplete": "",
            "query": {"pages": {"1": {
                "pageid": 1, "ns": 0, "title": title,
                "extract": extract,
                "links": links_json
            }}}
        })
    }

    async fn mount_article(
        server: &MockServer,
        title: &str,
        extract: &str,
        links: &[&str],
        expected_fetches: u64,
    ) {
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("titles", title))
            .respond_with(ResponseTemplate::new(200).set_body_json(article_body(
                title, extract, links,
            )))
            .expect(expected_fetches)
            .mount(server)
            .await;
    }

    /// Test that a match in the start article reports distance 1
    #[tokio::test]
    async fn test_finds_target_in_start_article() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "Chemistry", "Basic chemistry notes.", &[], 1).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("Chemistry", "chemistry").await.unwrap();

        assert_eq!(outcome.distance, Some(1));
        assert_eq!(outcome.articles_processed, 1);
        assert!(outcome.found());
    }

    /// Test breadth-first order: a match one hop out reports distance 2
    /// and the sibling branch is never fetched
    #[tokio::test]
    async fn test_finds_target_at_distance_two() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "Nothing of note.", &["B", "C"], 1).await;
        mount_article(&mock_server, "B", "Contains quantum physics.", &[], 1).await;
        mount_article(&mock_server, "C", "Also mentions quantum.", &[], 0).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("A", "quantum").await.unwrap();

        assert_eq!(outcome.distance, Some(2));
        assert_eq!(outcome.articles_processed, 2);
    }

    /// Test that titles at max depth are checked but never expanded
    #[tokio::test]
    async fn test_max_depth_stops_expansion() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "Nothing of note.", &["B"], 1).await;
        // Would match if it were ever fetched
        mount_article(&mock_server, "B", "Contains quantum physics.", &[], 0).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)))
            .with_max_depth(1);
        let outcome = search.run("A", "quantum").await.unwrap();

        assert_eq!(outcome.distance, None);
        assert_eq!(outcome.articles_processed, 1);
        assert!(!outcome.found());
    }

    /// Test that a nonexistent start article reports not-found
    #[tokio::test]
    async fn test_missing_start_is_not_found() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "batchcomplete": "",
            "query": {"pages": {"-1": {"ns": 0, "title": "Ghost", "missing": ""}}}
        });
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("Ghost", "anything").await.unwrap();

        assert_eq!(outcome.distance, None);
        assert_eq!(outcome.articles_processed, 1);
    }

    /// Test that a transport failure abandons the branch instead of
    /// aborting the search
    #[tokio::test]
    async fn test_failed_fetch_abandons_branch() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "Nothing of note.", &["Flaky", "C"], 1).await;
        Mock::given(method("GET"))
            .and(path("/w/api.php"))
            .and(query_param("titles", "Flaky"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        mount_article(&mock_server, "C", "Contains quantum physics.", &[], 1).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("A", "quantum").await.unwrap();

        // Flaky errored out, but its sibling still got its turn
        assert_eq!(outcome.distance, Some(2));
        assert_eq!(outcome.articles_processed, 3);
    }

    /// Test that each title is fetched at most once, self-links and
    /// duplicate frontier entries included
    #[tokio::test]
    async fn test_each_title_processed_once() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "Start here.", &["A", "B", "C"], 1).await;
        mount_article(&mock_server, "B", "Middle page.", &["C", "A"], 1).await;
        mount_article(&mock_server, "C", "End page.", &[], 1).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("A", "nomatch").await.unwrap();

        assert_eq!(outcome.distance, None);
        assert_eq!(outcome.articles_processed, 3);
    }

    /// Test that the progress callback sees every processed title with
    /// its distance, in traversal order
    #[tokio::test]
    async fn test_progress_callback_reports_titles() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "Nothing of note.", &["B"], 1).await;
        mount_article(&mock_server, "B", "Contains quantum physics.", &[], 1).await;

        let seen: Arc<Mutex<Vec<(usize, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)))
            .with_progress_callback(Arc::new(move |distance, title| {
                seen_clone.lock().unwrap().push((distance, title));
            }));
        let outcome = search.run("A", "quantum").await.unwrap();

        assert_eq!(outcome.distance, Some(2));
        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![(1, "A".to_string()), (2, "B".to_string())]);
    }

    /// Test whole-word matching through a traversal: a partial hit in
    /// one article must not stop the search from reaching the real one
    #[tokio::test]
    async fn test_partial_word_does_not_terminate() {
        let mock_server = MockServer::start().await;
        mount_article(&mock_server, "A", "All about categories.", &["B"], 1).await;
        mount_article(&mock_server, "B", "A category of its own.", &[], 1).await;

        let search = DistanceSearch::new(ArticleFetcher::new(api_url(&mock_server)));
        let outcome = search.run("A", "category").await.unwrap();

        assert_eq!(outcome.distance, Some(2));
    }
}

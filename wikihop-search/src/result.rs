use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A fetched article: plain-text body plus every outgoing link title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    pub links: Vec<String>,
}

impl Article {
    pub fn new(title: String) -> Self {
        Self {
            title,
            content: String::new(),
            links: Vec::new(),
        }
    }

    /// False when the title resolved to no page or the page has no
    /// extractable text. The traversal abandons such branches.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Final outcome of a single distance search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub start_title: String,
    pub target_word: String,
    /// Link-graph distance at which the target word was found, counting
    /// the start article as 1. `None` when the word was not found within
    /// `max_depth` hops.
    pub distance: Option<usize>,
    pub articles_processed: usize,
    pub max_depth: usize,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.distance.is_some()
    }
}

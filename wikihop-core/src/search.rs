use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wikihop_search::result::SearchOutcome;
use wikihop_search::{ArticleFetcher, DistanceSearch};

/// Options for configuring a distance search
pub struct SearchOptions {
    pub start_title: String,
    pub target_word: String,
    pub max_depth: usize,
    pub api_url: String,
    pub timeout_secs: u64,
    pub show_progress_bar: bool,
}

/// Callback for reporting search progress
pub type SearchProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Execute a distance search with the given options
/// Returns the search outcome
pub async fn execute_search(
    options: SearchOptions,
    progress_callback: Option<SearchProgressCallback>,
) -> Result<SearchOutcome, String> {
    let SearchOptions {
        start_title,
        target_word,
        max_depth,
        api_url,
        timeout_secs,
        show_progress_bar,
    } = options;

    // Set up a single spinner for traversal progress (only if enabled)
    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting search...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking processed articles
    let processed_count = Arc::new(AtomicUsize::new(0));

    // Per-article progress updates (only if the spinner is enabled)
    let internal_progress_callback: wikihop_search::search::ProgressCallback = if show_progress_bar
    {
        let pb_clone = progress_bar.clone().unwrap();
        let count_clone = processed_count.clone();
        Arc::new(move |distance: usize, title: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            pb_clone.set_message(format!(
                "[depth {}] {} ... {} articles processed",
                distance, title, count
            ));
            pb_clone.tick();
        })
    } else {
        // No-op callback when the spinner is disabled
        Arc::new(|_distance: usize, _title: String| {})
    };

    if let Some(ref callback) = progress_callback {
        callback(format!(
            "Searching for '{}' starting at '{}'",
            target_word, start_title
        ));
    }

    let fetcher = ArticleFetcher::with_timeout(api_url, timeout_secs);
    let search = DistanceSearch::new(fetcher)
        .with_max_depth(max_depth)
        .with_progress_callback(internal_progress_callback);

    let outcome = match search.run(&start_title, &target_word).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // A failed search must not leave the spinner hanging
            if let Some(ref pb) = progress_bar {
                pb.finish_and_clear();
            }
            return Err(format!("Search failed: {}", e));
        }
    };

    // Finish the spinner (only if enabled)
    if let Some(ref pb) = progress_bar {
        let total = processed_count.load(Ordering::Relaxed);
        pb.finish_with_message(format!("Search complete. {} articles processed", total));
    }

    Ok(outcome)
}

/// Generate a search report from an outcome
pub fn generate_search_report(outcome: &SearchOutcome) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Start article:      {}\n", outcome.start_title));
    report.push_str(&format!("  Target word:        {}\n", outcome.target_word));
    report.push_str(&format!("  Max depth:          {}\n", outcome.max_depth));
    report.push_str(&format!(
        "  Articles processed: {}\n",
        outcome.articles_processed
    ));
    report.push_str(&format!(
        "  Elapsed:            {:.1}s\n",
        outcome.elapsed.as_secs_f64()
    ));
    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    match outcome.distance {
        Some(distance) => {
            report.push_str(&format!(
                "Distance between '{}' and '{}': \x1b[32m{}\x1b[0m\n",
                outcome.start_title, outcome.target_word, distance
            ));
        }
        None => {
            report.push_str(&format!(
                "\x1b[33m'{}' was not found within {} hops of '{}'\x1b[0m\n",
                outcome.target_word, outcome.max_depth, outcome.start_title
            ));
        }
    }

    report
}

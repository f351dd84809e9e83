// Report rendering for search outcomes

use serde::{Deserialize, Serialize};
use wikihop_search::result::SearchOutcome;

use crate::search::generate_search_report;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Render a search outcome in the requested format
pub fn render_report(outcome: &SearchOutcome, format: &ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(generate_search_report(outcome)),
        ReportFormat::Json => {
            generate_json_report(outcome).map_err(|e| format!("Failed to serialize report: {}", e))
        }
    }
}

pub fn generate_json_report(outcome: &SearchOutcome) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Wikihop",
                "version": env!("CARGO_PKG_VERSION"),
                "format": "json"
            },
            "search": {
                "start_title": outcome.start_title,
                "target_word": outcome.target_word,
                "max_depth": outcome.max_depth,
                "articles_processed": outcome.articles_processed,
                "elapsed_seconds": outcome.elapsed.as_secs_f64(),
                "found": outcome.found(),
                "distance": outcome.distance
            }
        }
    });

    serde_json::to_string_pretty(&json_report)
}

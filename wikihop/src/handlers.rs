use clap::ArgMatches;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use url::Url;

// Helper functions for the interactive handler

/// Trim surrounding whitespace from an entered term; None when nothing
/// is left. Inner spaces survive, multi-word titles are fine.
pub fn sanitize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Interpret a yes/no answer; only "y"/"yes" count as yes
pub fn parse_yes_no(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
}

// Re-export search types and functions from wikihop-core
pub use wikihop_core::report::{ReportFormat, render_report};
pub use wikihop_core::search::{
    SearchOptions, SearchProgressCallback, execute_search, generate_search_report,
};

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

fn prompt_line(msg: &str) -> anyhow::Result<String> {
    print!("{} ", msg.bright_cyan().bold());
    io::stdout().flush()?;
    let mut response = String::new();
    let bytes_read = io::stdin().read_line(&mut response)?;
    if bytes_read == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(response)
}

fn read_term(msg: &str) -> anyhow::Result<String> {
    loop {
        let line = prompt_line(msg)?;
        match sanitize_term(&line) {
            Some(term) => return Ok(term),
            None => println!("{}", "Please enter a non-empty term.".yellow()),
        }
    }
}

pub async fn handle_search(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let start = sub_matches.get_one::<String>("START").unwrap();
    let target = sub_matches.get_one::<String>("TARGET").unwrap();
    let max_depth = *sub_matches.get_one::<usize>("max-depth").unwrap_or(&5);
    let api_url = sub_matches.get_one::<Url>("api-url").unwrap();
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);

    // Keep stdout clean for machine formats
    let text_output = matches!(format, ReportFormat::Text);

    if text_output {
        println!("\n🔎 Searching for '{}' starting at '{}'", target, start);
        println!("Max depth: {}", max_depth);
        println!("API endpoint: {}\n", api_url);
    }

    let options = SearchOptions {
        start_title: start.clone(),
        target_word: target.clone(),
        max_depth,
        api_url: api_url.to_string(),
        timeout_secs,
        show_progress_bar: text_output,
    };

    let outcome = match execute_search(options, None).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ Search failed: {}", e);
            std::process::exit(1);
        }
    };

    if text_output {
        println!("\n✓ Search complete!\n");
    }

    match render_report(&outcome, &format) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

pub async fn handle_interactive(sub_matches: &ArgMatches) -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let max_depth = *sub_matches.get_one::<usize>("max-depth").unwrap_or(&5);
    let api_url = sub_matches.get_one::<Url>("api-url").unwrap();
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);

    print_divider();
    println!("{}", "  WIKIHOP INTERACTIVE SEARCH".bright_white().bold());
    print_divider();
    println!();
    println!("Distance counts link hops; the start article is hop 1.");
    println!("Max depth: {}", max_depth);

    loop {
        println!();
        let start_title = read_term("Start article:")?;
        let target_word = read_term("Target word:")?;

        let options = SearchOptions {
            start_title,
            target_word,
            max_depth,
            api_url: api_url.to_string(),
            timeout_secs,
            show_progress_bar: true,
        };

        let progress_callback: SearchProgressCallback = Arc::new(|msg: String| {
            println!("{}", msg);
        });

        match execute_search(options, Some(progress_callback)).await {
            Ok(outcome) => {
                println!();
                print!("{}", generate_search_report(&outcome));
            }
            Err(e) => eprintln!("✗ Search failed: {}", e),
        }

        println!();
        let again = prompt_line("Search again? [y/N]:")?;
        if !parse_yes_no(&again) {
            break;
        }
    }

    Ok(())
}

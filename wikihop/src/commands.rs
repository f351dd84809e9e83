use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikihop")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikihop")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("search")
                .about(
                    "Measure the link-graph distance from a start article to the first \
                article containing a target word.",
                )
                .arg(
                    arg!([START])
                        .required(true)
                        .help("Title of the article to start from"),
                )
                .arg(
                    arg!([TARGET])
                        .required(true)
                        .help("Word to look for in article text (whole word, case-insensitive)"),
                )
                .arg(
                    arg!(-d --"max-depth" <DEPTH>)
                        .required(false)
                        .help("Maximum search depth; the start article counts as depth 1")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    arg!(--"api-url" <URL>)
                        .required(false)
                        .help("MediaWiki API endpoint to query")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("https://en.wikipedia.org/w/api.php"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("interactive")
                .about("Prompt for term pairs in a loop and search each pair in turn.")
                .arg(
                    arg!(-d --"max-depth" <DEPTH>)
                        .required(false)
                        .help("Maximum search depth; the start article counts as depth 1")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("5"),
                )
                .arg(
                    arg!(--"api-url" <URL>)
                        .required(false)
                        .help("MediaWiki API endpoint to query")
                        .value_parser(clap::value_parser!(Url))
                        .default_value("https://en.wikipedia.org/w/api.php"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                ),
        )
}

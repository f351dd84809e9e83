pub mod report;
pub mod search;

use colored::Colorize;

/// Print the Wikihop startup banner
pub fn print_banner() {
    let banner = r#"
██╗    ██╗██╗██╗  ██╗██╗██╗  ██╗ ██████╗ ██████╗
██║    ██║██║██║ ██╔╝██║██║  ██║██╔═══██╗██╔══██╗
██║ █╗ ██║██║█████╔╝ ██║███████║██║   ██║██████╔╝
██║███╗██║██║██╔═██╗ ██║██╔══██║██║   ██║██╔═══╝
╚███╔███╔╝██║██║  ██╗██║██║  ██║╚██████╔╝██║
 ╚══╝╚══╝ ╚═╝╚═╝  ╚═╝╚═╝╚═╝  ╚═╝ ╚═════╝ ╚═╝
"#;
    println!("{}", banner.bright_cyan());
    println!("{}", "  how many hops from here to there?".bright_white());
    println!();
}

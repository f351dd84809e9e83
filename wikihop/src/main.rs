use wikihop::commands::command_argument_builder;
use wikihop::handlers;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        wikihop_core::print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("search", primary_command)) => handlers::handle_search(primary_command).await,
        Some(("interactive", primary_command)) => {
            if let Err(e) = handlers::handle_interactive(primary_command).await {
                eprintln!("Error running interactive mode: {}", e);
                std::process::exit(1);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

use colored::Colorize;

mod commands;
mod export;
mod handlers;

#[tokio::main]
async fn main() {
    let cmd = commands::command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("scrape", primary_command)) => handlers::handle_scrape(primary_command).await,
        Some(("extract", primary_command)) => handlers::handle_extract(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn print_banner() {
    println!(
        "{} {}",
        "menugrab".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("{}", "menu extraction for delivery-platform pages".dimmed());
    println!();
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

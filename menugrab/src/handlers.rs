use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use menugrab_scraper::{MenuScraper, PageFetcher, ScrollPolicy};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::export::{self, ExportFormat};

pub async fn handle_scrape(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if let Err(e) = run_scrape(args).await {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

pub async fn handle_extract(args: &ArgMatches) {
    tracing_subscriber::fmt::init();

    if let Err(e) = run_extract(args).await {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

async fn run_scrape(args: &ArgMatches) -> Result<()> {
    let url = args.get_one::<Url>("url").unwrap();
    let restaurant = args.get_one::<String>("restaurant").unwrap();
    validate_restaurant_name(restaurant)?;

    let steps = *args.get_one::<u32>("scroll-steps").unwrap();
    let wait = *args.get_one::<u64>("scroll-wait").unwrap();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Rendering {}...", url));

    let fetcher = PageFetcher::new().with_scroll_policy(ScrollPolicy {
        steps,
        pause: Duration::from_secs(wait),
    });
    let html = fetcher
        .fetch(url.as_str())
        .await
        .context("Failed to render the page")?;

    spinner.finish_with_message(format!("Rendered document ({} bytes)", html.len()));

    run_extraction(args, &html, restaurant).await
}

async fn run_extract(args: &ArgMatches) -> Result<()> {
    let input = args.get_one::<PathBuf>("input").unwrap();
    let restaurant = args.get_one::<String>("restaurant").unwrap();
    validate_restaurant_name(restaurant)?;

    let html = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    run_extraction(args, &html, restaurant).await
}

async fn run_extraction(args: &ArgMatches, html: &str, restaurant: &str) -> Result<()> {
    let photos = expand_path(args.get_one::<String>("photos").unwrap());
    let out = expand_path(args.get_one::<String>("out").unwrap());
    let format = parse_format(args.get_one::<String>("format").unwrap())?;

    let scraper = MenuScraper::new().with_base_path(&photos);
    let rows = scraper.scrape_menu(html, restaurant).await?;

    export::write_rows(&rows, &out, format)?;

    println!(
        "{} {} rows exported to {}",
        "Done:".bright_green().bold(),
        rows.len(),
        out.display()
    );
    println!(
        "Photos (where available) saved under {}",
        photos.join(restaurant).display()
    );
    Ok(())
}

/// Expand `~` in user-supplied paths.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn parse_format(raw: &str) -> Result<ExportFormat> {
    ExportFormat::from_str(raw)
        .ok_or_else(|| anyhow!("Unknown output format '{}', expected csv or json", raw))
}

/// The restaurant name becomes a directory name verbatim, so reject
/// anything that would escape or break the photo directory.
pub fn validate_restaurant_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Restaurant name must not be empty");
    }
    if name == "." || name == ".." {
        bail!("Restaurant name must not be a relative path component");
    }
    if name.chars().any(|c| matches!(c, '/' | '\\' | '\0')) {
        bail!("Restaurant name must not contain path separators");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_restaurant_names_are_accepted() {
        assert!(validate_restaurant_name("Pizza Palace").is_ok());
        assert!(validate_restaurant_name("Al Baik - Marina").is_ok());
    }

    #[test]
    fn path_unsafe_names_are_rejected() {
        assert!(validate_restaurant_name("").is_err());
        assert!(validate_restaurant_name("   ").is_err());
        assert!(validate_restaurant_name(".").is_err());
        assert!(validate_restaurant_name("..").is_err());
        assert!(validate_restaurant_name("a/b").is_err());
        assert!(validate_restaurant_name("a\\b").is_err());
    }

    #[test]
    fn tilde_paths_are_expanded() {
        let expanded = expand_path("~/menus");
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(parse_format("csv").is_ok());
        assert!(parse_format("json").is_ok());
        assert!(parse_format("yaml").is_err());
    }
}

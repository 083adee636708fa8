use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("menugrab")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("menugrab")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("scrape")
                .about(
                    "Fetch a restaurant page in a headless browser, scroll it to load the \
                full menu, and export the extracted rows.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The restaurant page URL to fetch")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-r --"restaurant" <NAME>)
                        .required(true)
                        .help("Restaurant name; also used as the photo directory name"),
                )
                .arg(
                    arg!(-o --"out" <PATH>)
                        .required(false)
                        .help("Output file for the extracted rows")
                        .default_value("menu.csv"),
                )
                .arg(
                    arg!(--"photos" <DIR>)
                        .required(false)
                        .help("Base directory for saved item photos")
                        .default_value("."),
                )
                .arg(
                    arg!(--"format" <FORMAT>)
                        .required(false)
                        .help("Output format: csv or json")
                        .default_value("csv"),
                )
                .arg(
                    arg!(--"scroll-steps" <N>)
                        .required(false)
                        .help("Number of incremental scroll steps while loading the page")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"scroll-wait" <SECONDS>)
                        .required(false)
                        .help("Seconds to wait after each scroll step")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("2"),
                ),
        )
        .subcommand(
            command!("extract")
                .about("Extract menu rows from previously saved rendered markup.")
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(true)
                        .help("Path to a saved rendered-HTML file")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-r --"restaurant" <NAME>)
                        .required(true)
                        .help("Restaurant name; also used as the photo directory name"),
                )
                .arg(
                    arg!(-o --"out" <PATH>)
                        .required(false)
                        .help("Output file for the extracted rows")
                        .default_value("menu.csv"),
                )
                .arg(
                    arg!(--"photos" <DIR>)
                        .required(false)
                        .help("Base directory for saved item photos")
                        .default_value("."),
                )
                .arg(
                    arg!(--"format" <FORMAT>)
                        .required(false)
                        .help("Output format: csv or json")
                        .default_value("csv"),
                ),
        )
}

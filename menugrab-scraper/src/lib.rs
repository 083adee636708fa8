pub mod error;
pub mod extract;
pub mod fetcher;
pub mod menu;
pub mod paths;

pub use error::ScrapeError;
pub use extract::MenuScraper;
pub use fetcher::{PageFetcher, ScrollPolicy};
pub use menu::MenuRow;

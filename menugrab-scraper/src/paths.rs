//! Fixed structural selector paths for the delivery-platform menu page.
//!
//! The page this crate targets renders every restaurant menu into the
//! same nested container structure:
//!
//! ```text
//! body > div#__next > div[data-testid="app-component"] > div{4} > div.mt-2
//!   > div > div.row > div.col-md-11 > div.row > div.col-sm-11
//!     > div.sc-5b556770-0
//!       > div                                  (one per category)
//!         > div.accordion > div.text-wrap > h4 (category heading)
//!         > div > div.content.open > div
//!           > div                              (one per item)
//!             > div.item-name > div, div       (name, description)
//!             > div.price-rating > div > div > span.currency
//!             > div{6} > img                   (photo, optional)
//! ```
//!
//! The paths are strict: there are no fallback selectors, and a markup
//! change on the site breaks them all at once. Keeping them in one
//! place makes that breakage a one-file fix.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Document root down to the list of category sections.
pub const CATEGORIES: &str = "body>div#__next>div[data-testid=\"app-component\"]>div>div>div>div>div.mt-2>div>div.row>div.col-md-11>div.row>div.col-sm-11>div.sc-5b556770-0>div";

/// Category section down to its heading.
pub const CATEGORY_NAME: &str = "div.accordion>div.text-wrap>h4";

/// Category section down to its item entries.
pub const ITEMS: &str = "div>div.content.open>div>div";

/// Item entry down to its name element.
pub const ITEM_NAME: &str = "div.item-name>div:nth-child(1)";

/// Item entry down to its description element.
pub const ITEM_DESCRIPTION: &str = "div.item-name>div:nth-child(2)";

/// Item entry down to the currency span holding the price text.
pub const ITEM_PRICE: &str = "div.price-rating>div>div>span.currency";

/// Item entry down to the lazy-loaded photo element.
pub const ITEM_PHOTO: &str = "div>div>div>div>div>div>img";

fn selector(path: &'static str) -> Selector {
    // All paths are compile-time constants; a parse failure is a bug.
    Selector::parse(path).unwrap()
}

/// Selector-path lookup over a parsed document tree.
///
/// `select_all` mirrors the discovery contract (structural mismatch is
/// an empty result); `select_first` mirrors the field-extraction
/// contract (structural mismatch is a hard failure).
pub trait NodeQuery {
    fn select_all<'a>(&'a self, path: &'static str) -> Vec<ElementRef<'a>>;

    fn select_first<'a>(&'a self, path: &'static str) -> Result<ElementRef<'a>> {
        self.select_all(path)
            .into_iter()
            .next()
            .ok_or(ScrapeError::StructuralMismatch { path })
    }
}

impl NodeQuery for Html {
    fn select_all<'a>(&'a self, path: &'static str) -> Vec<ElementRef<'a>> {
        self.select(&selector(path)).collect()
    }
}

impl NodeQuery for ElementRef<'_> {
    fn select_all<'a>(&'a self, path: &'static str) -> Vec<ElementRef<'a>> {
        self.select(&selector(path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_paths_parse_as_selectors() {
        for path in [
            CATEGORIES,
            CATEGORY_NAME,
            ITEMS,
            ITEM_NAME,
            ITEM_DESCRIPTION,
            ITEM_PRICE,
            ITEM_PHOTO,
        ] {
            assert!(Selector::parse(path).is_ok(), "bad path: {}", path);
        }
    }

    #[test]
    fn select_all_returns_empty_on_mismatch() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(doc.select_all(CATEGORIES).is_empty());
    }

    #[test]
    fn select_first_errors_on_mismatch() {
        let doc = Html::parse_document("<html><body></body></html>");
        let err = doc.select_first(CATEGORY_NAME).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::StructuralMismatch { path } if path == CATEGORY_NAME
        ));
    }

    #[test]
    fn select_first_finds_nested_heading() {
        let doc = Html::parse_document(
            r#"<div class="accordion"><div class="text-wrap"><h4>Pizza</h4></div></div>"#,
        );
        let heading = doc.select_first(CATEGORY_NAME).unwrap();
        assert_eq!(heading.text().collect::<String>(), "Pizza");
    }
}

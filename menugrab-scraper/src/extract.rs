use crate::error::{Result, ScrapeError};
use crate::menu::{MenuItem, MenuRow};
use crate::paths::{self, NodeQuery};
use reqwest::Client;
use scraper::{ElementRef, Html};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A photo to fetch after the parse pass, keyed by the item it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoJob {
    pub item_name: String,
    pub url: String,
}

/// Enumerate the category sections of a rendered menu page.
///
/// Structural mismatch yields an empty list, never an error: a page
/// with no recognizable menu simply produces no rows.
pub fn discover_categories(document: &Html) -> Vec<ElementRef<'_>> {
    document.select_all(paths::CATEGORIES)
}

/// The display name of a category section.
///
/// A section without a heading is a structural mismatch that aborts
/// extraction for the whole page; there is no default name.
pub fn category_name(section: ElementRef<'_>) -> Result<String> {
    let heading = section.select_first(paths::CATEGORY_NAME)?;
    Ok(heading.text().collect())
}

/// Enumerate the item entries within a category section.
pub fn discover_items<'a>(section: &'a ElementRef<'_>) -> Vec<ElementRef<'a>> {
    section.select_all(paths::ITEMS)
}

/// Extract name, description and price from one item entry.
///
/// Name and description hard-fail on a missing element. Price is the
/// one field with graceful degradation: a missing currency span or
/// non-numeric text records `None` instead of failing the page.
pub fn extract_item(entry: &ElementRef<'_>) -> Result<MenuItem> {
    let mut name: String = entry.select_first(paths::ITEM_NAME)?.text().collect();
    // Truncated names on the page end in a period; drop it.
    if name.ends_with('.') {
        name.pop();
    }

    let description: String = entry
        .select_first(paths::ITEM_DESCRIPTION)?
        .text()
        .collect();

    let price = entry
        .select_first(paths::ITEM_PRICE)
        .ok()
        .and_then(|span| span.text().collect::<String>().trim().parse::<f64>().ok());

    Ok(MenuItem {
        name,
        description,
        price,
    })
}

/// The source URL of an item's photo.
pub fn photo_url(entry: &ElementRef<'_>) -> Result<String> {
    let img = entry.select_first(paths::ITEM_PHOTO)?;
    img.value()
        .attr("src")
        .map(str::to_string)
        .ok_or(ScrapeError::StructuralMismatch {
            path: paths::ITEM_PHOTO,
        })
}

/// Parse the rendered markup and produce the ordered rows plus one
/// photo job per item that carries an image.
///
/// This pass is synchronous and owns the parsed tree for its duration
/// only; photo downloads happen afterwards so the non-`Send` document
/// never crosses an await point.
pub fn extract_rows(html: &str) -> Result<(Vec<MenuRow>, Vec<PhotoJob>)> {
    let document = Html::parse_document(html);

    let mut rows = Vec::new();
    let mut photos = Vec::new();

    for section in discover_categories(&document) {
        let category = category_name(section)?;
        for entry in discover_items(&section) {
            let item = extract_item(&entry)?;
            // Photo lookup is enrichment: a missing image element is
            // not an error for the row.
            if let Ok(url) = photo_url(&entry) {
                photos.push(PhotoJob {
                    item_name: item.name.clone(),
                    url,
                });
            }
            rows.push(MenuRow {
                category: category.clone(),
                name: item.name,
                description: item.description,
                price: item.price,
            });
        }
    }

    Ok((rows, photos))
}

/// Orchestrates extraction of a restaurant menu from rendered markup,
/// saving item photos under `<base_path>/<restaurant>/` as a side
/// effect.
pub struct MenuScraper {
    client: Client,
    base_path: PathBuf,
}

impl MenuScraper {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Menugrab/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_path: PathBuf::from("."),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Extract all menu rows from `html`, in document order.
    ///
    /// A missing category heading, item name or item description aborts
    /// the whole call with no partial rows. Photo retrieval is
    /// best-effort: every failure in URL lookup, download or file write
    /// is discarded here, at this one call site, and never affects row
    /// production.
    pub async fn scrape_menu(&self, html: &str, restaurant: &str) -> Result<Vec<MenuRow>> {
        let photo_dir = self.base_path.join(restaurant);
        fs::create_dir_all(&photo_dir)?;

        let (rows, photos) = extract_rows(html)?;
        info!(
            "Extracted {} menu rows for {} ({} photos to fetch)",
            rows.len(),
            restaurant,
            photos.len()
        );

        for job in &photos {
            if let Err(e) = self.save_photo(job, &photo_dir).await {
                debug!("Skipping photo for {}: {}", job.item_name, e);
            }
        }

        Ok(rows)
    }

    async fn save_photo(&self, job: &PhotoJob, dir: &Path) -> Result<()> {
        let bytes = self
            .client
            .get(&job.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let target = dir.join(format!("{}.jpg", job.item_name));
        tokio::fs::write(&target, &bytes).await?;
        debug!("Saved photo {}", target.display());
        Ok(())
    }
}

impl Default for MenuScraper {
    fn default() -> Self {
        Self::new()
    }
}

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::models::{BossId, ItemRecord};
use crate::parsers::{clean_text, has_all_classes};
use crate::utils::http::fetch_page;

/// Class tokens that fingerprint an "item slot" anchor on a boss page.
/// maplen.gg exposes no structured API, so item identity hangs on this exact
/// combination of layout classes; when the site restyles, matching quietly
/// drops to zero (the `analyze_html` bin reports drift).
pub const MARKER_CLASSES: [&str; 9] = [
    "flex",
    "h-10",
    "w-10",
    "items-center",
    "justify-center",
    "rounded",
    "border",
    "bg-gray-200",
    "dark:bg-gray-800",
];

static TITLED_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[title]").expect("Invalid anchor selector"));
static NESTED_IMG: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("Invalid img selector"));

pub struct MaplenScraper {
    config: Arc<Config>,
}

impl MaplenScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn boss_url(&self, boss: &BossId) -> String {
        format!("{}/boss/{}", self.config.base_url.trim_end_matches('/'), boss)
    }

    /// Run the full boss loop: one GET per configured boss, in list order.
    /// A page with content contributes its parsed records followed by the
    /// supplemental items stamped for that boss; a failed fetch or an empty
    /// body contributes nothing at all.
    pub async fn scrape(&self, client: &Client) -> Vec<ItemRecord> {
        let mut records = Vec::new();

        for boss in &self.config.bosses {
            info!("Fetching data for {}...", boss);
            let url = self.boss_url(boss);

            // An empty 200 body counts as no content for this boss.
            if let Some(html) = fetch_page(client, &url).await.filter(|html| !html.is_empty()) {
                let items = extract_items(&html, boss, &self.config.base_url);
                info!("Found {} drop items for {}", items.len(), boss);

                records.extend(items);
                // Supplementals ride along with every page that had content,
                // even one that parsed to zero items.
                records.extend(
                    self.config
                        .supplemental_items
                        .iter()
                        .map(|item| item.stamp(boss)),
                );
            }
        }

        records
    }
}

/// Pull item records out of one boss page. An anchor qualifies only with a
/// non-empty `title` and the full marker-class fingerprint; the image URL is
/// the `src` of its first nested `<img>`, resolved against `base_url`.
/// Anchors missing either piece are skipped silently.
pub fn extract_items(html: &str, boss: &BossId, base_url: &str) -> Vec<ItemRecord> {
    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for anchor in document.select(&TITLED_ANCHOR) {
        let class_attr = anchor.value().attr("class").unwrap_or("");
        if !has_all_classes(class_attr, &MARKER_CLASSES) {
            continue;
        }

        let item_name = clean_text(anchor.value().attr("title").unwrap_or(""));
        if item_name.is_empty() {
            continue;
        }

        let image_url = anchor
            .select(&NESTED_IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| !src.trim().is_empty())
            .and_then(|src| absolutize(base_url, src));

        if let Some(image_url) = image_url {
            items.push(ItemRecord {
                boss_name: boss.clone(),
                item_name,
                image_url,
            });
        }
    }

    items
}

/// Absolute srcs pass through unchanged; relative ones resolve against the
/// page base. A src that cannot be joined counts as missing.
fn absolutize(base_url: &str, src: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    base.join(src).ok().map(|url| url.to_string())
}

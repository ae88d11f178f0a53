use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::env;
use std::fs;

// Keep in sync with MARKER_CLASSES in src/scrapers/maplen.rs; a bin target
// cannot link the main binary's modules.
const MARKER_CLASSES: [&str; 9] = [
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

/// Probe one boss page and report how well the marker fingerprint still fits
/// the live markup. Run this when a scrape suddenly comes back empty.
#[tokio::main]
async fn main() -> Result<()> {
    let boss = env::args()
        .nth(1)
        .unwrap_or_else(|| "zakum-chaos".to_string());
    let url = format!("https://maplen.gg/boss/{}", boss);

    let client = Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36")
        .build()?;

    println!("Fetching {}...", url);
    let response = client.get(&url).send().await?;
    println!("Status: {}", response.status());
    let html = response.text().await?;

    let sample_path = format!("{}_sample.html", boss);
    fs::write(&sample_path, &html)?;
    println!("Saved markup to {}", sample_path);

    let document = Html::parse_document(&html);
    let anchor_selector = Selector::parse("a[title]").unwrap();

    let mut full_matches = 0;
    let mut near_misses = 0;

    for anchor in document.select(&anchor_selector) {
        let classes: HashSet<&str> = anchor
            .value()
            .attr("class")
            .unwrap_or("")
            .split_whitespace()
            .collect();
        let missing: Vec<&str> = MARKER_CLASSES
            .iter()
            .copied()
            .filter(|class| !classes.contains(class))
            .collect();

        if missing.is_empty() {
            full_matches += 1;
        } else if missing.len() <= 3 {
            near_misses += 1;
            println!(
                "Near miss: title={:?} missing {:?}",
                anchor.value().attr("title").unwrap_or(""),
                missing
            );
        }
    }

    println!("Titled anchors with full marker fingerprint: {}", full_matches);
    println!("Near misses (at most 3 tokens short): {}", near_misses);
    if full_matches == 0 {
        println!("No anchors matched; the site markup likely changed.");
    }

    Ok(())
}

use anyhow::Result;
use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

mod config;
mod export;
mod models;
mod parsers;
mod scrapers;
mod utils;

use crate::config::Config;
use crate::scrapers::MaplenScraper;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maple_drops=info".parse()?),
        )
        .init();

    info!(
        "--- Starting drop scrape at {} ---",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // Load configuration
    let config = Arc::new(Config::load()?);

    // Initialize HTTP client
    let client = utils::http::create_client(&config.user_agent)?;

    // One page per boss, fetched in list order; the collection keeps that
    // order end to end.
    let scraper = MaplenScraper::new(config.clone());
    let records = scraper.scrape(&client).await;

    if records.is_empty() {
        warn!("No data collected for any boss");
        return Ok(());
    }

    info!(
        "Collected {} records across {} bosses",
        records.len(),
        config.bosses.len()
    );
    export::write_records(&config.output_path, config.output_mode, &records)?;

    Ok(())
}

use anyhow::Result;
use reqwest::{Client, ClientBuilder};
use tracing::{error, warn};

/// Build the shared HTTP client. Timeouts stay at library defaults.
pub fn create_client(user_agent: &str) -> Result<Client> {
    let client = ClientBuilder::new().user_agent(user_agent).build()?;

    Ok(client)
}

/// Single-attempt GET. Any transport failure, body-read failure, or
/// non-success status is logged and collapsed into `None`; that page simply
/// contributes no records to the run.
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Error fetching {}: {}", url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        warn!("HTTP error {}: {}", response.status(), url);
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Error reading body from {}: {}", url, e);
            None
        }
    }
}

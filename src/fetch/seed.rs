// src/fetch/seed.rs
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Default location of the flat SQL seed of Polish namedays.
pub const DEFAULT_SEED_URL: &str =
    "https://raw.githubusercontent.com/slaweklatka/sql-polish-namedays/master/2018-namedays.sql";

/// Download the seed text from `url_str`. A transport error or a non-2xx
/// status fails the whole build; there is no retry and no partial result.
pub async fn fetch_seed_text(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).with_context(|| format!("invalid seed URL {url_str}"))?;
    debug!("Fetching seed from {}", url);
    client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status from {}", url))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", url))
}

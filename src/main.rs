use anyhow::Result;
use namedays::{
    fetch::seed::{fetch_seed_text, DEFAULT_SEED_URL},
    parse::extract_namedays,
};
use reqwest::Client;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Where the presentation layer expects the generated lookup table.
const OUTPUT_PATH: &str = "data/namedays.json";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) fetch the seed ───────────────────────────────────────────
    let client = Client::new();
    info!("fetching seed from {}", DEFAULT_SEED_URL);
    let sql = fetch_seed_text(&client, DEFAULT_SEED_URL).await?;
    info!("fetched {} bytes", sql.len());

    // ─── 3) extract tuples into the lookup table ─────────────────────
    let (table, count) = extract_namedays(&sql);
    info!("processed {} tuples into {} dates", count, table.len());

    // ─── 4) write the artifact ───────────────────────────────────────
    let out = Path::new(OUTPUT_PATH);
    table.write_pretty(out)?;
    info!("wrote {}", out.display());

    Ok(())
}

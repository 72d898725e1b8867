//! Fixtures and livescores explorer.
//!
//! Lists today's fixtures page by page, logging the pagination and rate-limit metadata, then
//! streams the fixtures currently in play.
//!
//! Run with tracing enabled:
//! ```sh
//! SPORTMONKS_API_TOKEN=... RUST_LOG=info cargo run --example fixtures --features tracing
//! ```

use chrono::Utc;
use futures::{StreamExt as _, TryStreamExt as _};
use sportmonks_client_sdk::Client;
use sportmonks_client_sdk::types::{Query, Record};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::from_env("football")?;
    let today = Utc::now().date_naive();

    let query = Query::builder()
        .include(vec!["participants".to_owned(), "state".to_owned()])
        .per_page(50)
        .build();

    let mut pages = client
        .fixtures
        .fetcher()
        .pages(&format!("fixtures/date/{today}"), &query);

    while let Some(result) = pages.next().await {
        match result {
            Ok(page) => {
                let pagination = page.pagination.as_ref();
                info!(
                    date = %today,
                    current_page = ?pagination.and_then(|p| p.current_page),
                    has_more = ?pagination.and_then(|p| p.has_more),
                    remaining = ?page.rate_limit.as_ref().and_then(|r| r.remaining),
                    fixtures = page.data.len(),
                    "page"
                );
                for fixture in &page.data {
                    info!(name = ?fixture.get("name"), starting_at = ?fixture.get("starting_at"));
                }
            }
            Err(e) => {
                warn!(error = %e, "page error");
                break;
            }
        }
    }

    let live: Vec<Record> = client
        .fixtures
        .inplay_livescores(&Query::default())
        .try_collect()
        .await?;
    info!(total = live.len(), "fixtures in play");

    Ok(())
}

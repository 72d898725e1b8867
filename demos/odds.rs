//! Pre-match odds explorer.
//!
//! Streams the pre-match odds of one fixture, first for a single bookmaker and then for a single
//! market, following pagination until the API reports no further pages.
//!
//! Run with tracing enabled:
//! ```sh
//! SPORTMONKS_API_TOKEN=... RUST_LOG=info cargo run --example odds --features tracing -- 19135003
//! ```

use futures::StreamExt as _;
use sportmonks_client_sdk::types::{Filter, Query};
use sportmonks_client_sdk::{Client, RecordStream};
use tracing::{info, warn};

const BET365: u64 = 2;
const FULLTIME_RESULT: u64 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let fixture_id = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(19_135_003);

    let client = Client::from_env("football")?;
    let query = Query::builder()
        .include(vec!["market".to_owned(), "bookmaker".to_owned()])
        .build();

    drain(
        "bookmaker",
        client
            .odds
            .fixture_prematch_odds(fixture_id, Some(BET365), None, &query),
    )
    .await;
    drain(
        "market",
        client
            .odds
            .fixture_prematch_odds(fixture_id, None, Some(FULLTIME_RESULT), &query),
    )
    .await;

    let latest = Query::builder()
        .filter(vec![Filter::new("markets", [FULLTIME_RESULT])])
        .build();
    drain("latest", client.odds.latest_prematch_odds(&latest)).await;

    Ok(())
}

async fn drain(stream: &str, mut odds: RecordStream) {
    info!(stream, "starting stream");

    let mut count = 0_u32;

    while let Some(result) = odds.next().await {
        match result {
            Ok(odd) => {
                count += 1;
                info!(
                    stream,
                    count,
                    label = ?odd.get("label"),
                    value = ?odd.get("value"),
                    "odd"
                );
            }
            Err(e) => {
                warn!(stream, error = %e, "stream error");
                break;
            }
        }
    }

    info!(stream, total = count, "stream completed");
}

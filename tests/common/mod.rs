#![allow(
    unused,
    reason = "Each test binary uses a different subset of these helpers"
)]

use httpmock::MockServer;
use serde_json::Value;
use sportmonks_client_sdk::types::Record;
use sportmonks_client_sdk::{Client, Config};

pub const TOKEN: &str = "sm-test-token-0123456789";
pub const SPORT: &str = "football";

/// A football client pointed at `server`.
pub fn client(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().base_url(server.base_url()).build();

    Ok(Client::with_config(SPORT, TOKEN, config)?)
}

/// The `id` of every record, in the order they were yielded.
#[must_use]
pub fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|record| record.get("id").and_then(Value::as_i64))
        .collect()
}

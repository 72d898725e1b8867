#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the odds client, mostly around how the fixture-scoped endpoints pick
//! between bookmaker, market and unfiltered paths.

pub mod common;

mod fixture_scope {
    use futures::TryStreamExt as _;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use sportmonks_client_sdk::types::{Query, Record};

    use crate::common;

    #[tokio::test]
    async fn bookmaker_should_win_over_market() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let bookmaker = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/pre-match/fixtures/1/bookmakers/5");
            then.status(StatusCode::OK)
                .json_body(json!({"data": [{"id": 100, "bookmaker_id": 5, "market_id": 9}]}));
        });
        let market = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/pre-match/fixtures/1/markets/9");
            then.status(StatusCode::OK).json_body(json!({"data": []}));
        });
        let unfiltered = server.mock(|when, then| {
            when.method(GET).path("/football/odds/pre-match/fixtures/1");
            then.status(StatusCode::OK).json_body(json!({"data": []}));
        });

        let records: Vec<Record> = client
            .odds
            .fixture_prematch_odds(1, Some(5), Some(9), &Query::default())
            .try_collect()
            .await?;

        assert_eq!(common::ids(&records), vec![100]);
        bookmaker.assert_calls(1);
        market.assert_calls(0);
        unfiltered.assert_calls(0);

        Ok(())
    }

    #[tokio::test]
    async fn market_should_apply_without_bookmaker() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/inplay/fixtures/19135003/markets/1");
            then.status(StatusCode::OK).json_body(json!({
                "data": [
                    {"id": 1, "market_id": 1, "label": "Home"},
                    {"id": 2, "market_id": 1, "label": "Away"}
                ]
            }));
        });

        let records: Vec<Record> = client
            .odds
            .fixture_inplay_odds(19_135_003, None, Some(1), &Query::default())
            .try_collect()
            .await?;

        assert_eq!(common::ids(&records), vec![1, 2]);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn no_scope_should_request_fixture_path() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/premium/pre-match/fixtures/19135003");
            then.status(StatusCode::OK)
                .json_body(json!({"data": [{"id": 7}]}));
        });

        let records: Vec<Record> = client
            .odds
            .premium_fixture_prematch_odds(19_135_003, None, None, &Query::default())
            .try_collect()
            .await?;

        assert_eq!(common::ids(&records), vec![7]);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn premium_bookmaker_should_win_over_market() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/premium/pre-match/fixtures/3/bookmakers/2");
            then.status(StatusCode::OK).json_body(json!({"data": []}));
        });

        let records: Vec<Record> = client
            .odds
            .premium_fixture_prematch_odds(3, Some(2), Some(80), &Query::default())
            .try_collect()
            .await?;

        assert!(records.is_empty(), "expected no records");
        mock.assert();

        Ok(())
    }
}

mod feeds {
    use futures::TryStreamExt as _;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use sportmonks_client_sdk::types::{Filter, Query, Record};

    use crate::common::{self, TOKEN};

    #[tokio::test]
    async fn prematch_odds_should_send_query_and_token() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/pre-match")
                .header("Authorization", TOKEN)
                .query_param("include", "market;bookmaker")
                .query_param("select", "value,label")
                .query_param("filter", "markets:1,80;bookmakers:2");
            then.status(StatusCode::OK).json_body(json!({
                "data": [{"id": 1, "value": "1.80", "label": "Over"}]
            }));
        });

        let query = Query::builder()
            .include(vec!["market".to_owned(), "bookmaker".to_owned()])
            .select(vec!["value".to_owned(), "label".to_owned()])
            .filter(vec![
                Filter::new("markets", [1, 80]),
                Filter::new("bookmakers", [2]),
            ])
            .build();
        let records: Vec<Record> = client.odds.prematch_odds(&query).try_collect().await?;

        assert_eq!(records.len(), 1);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn omitted_parameters_should_not_be_sent() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/football/odds/inplay/latest")
                .query_param_missing("include")
                .query_param_missing("select")
                .query_param_missing("filter");
            then.status(StatusCode::OK).json_body(json!({"data": []}));
        });

        let records: Vec<Record> = client
            .odds
            .latest_inplay_odds(&Query::default())
            .try_collect()
            .await?;

        assert!(records.is_empty(), "expected no records");
        mock.assert();

        Ok(())
    }
}

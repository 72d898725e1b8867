#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

pub mod common;

use futures::TryStreamExt as _;
use httpmock::{Method::GET, MockServer};
use reqwest::StatusCode;
use serde_json::json;
use sportmonks_client_sdk::error::Kind;
use sportmonks_client_sdk::types::{NaiveDate, Query, Record};
use sportmonks_client_sdk::{Client, RecordStream};

/// Mocks `path` with a single record and asserts that `call` hits it exactly once.
async fn assert_path<F>(path: &str, call: F) -> anyhow::Result<()>
where
    F: FnOnce(&Client) -> RecordStream,
{
    let server = MockServer::start();
    let client = common::client(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(StatusCode::OK)
            .json_body(json!({"data": [{"id": 1}]}));
    });

    let records: Vec<Record> = call(&client).try_collect().await?;

    assert_eq!(common::ids(&records), vec![1], "unexpected records for {path}");
    mock.assert();

    Ok(())
}

mod fixtures {
    use super::*;

    #[tokio::test]
    async fn by_id_should_unwrap_single_object() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/football/fixtures/18535517");
            then.status(StatusCode::OK).json_body(json!({
                "data": {"id": 18_535_517, "name": "Celtic vs Rangers"}
            }));
        });

        let records: Vec<Record> = client
            .fixtures
            .fixture_by_id(18_535_517, &Query::default())
            .try_collect()
            .await?;

        assert_eq!(common::ids(&records), vec![18_535_517]);
        assert_eq!(records[0]["name"], "Celtic vs Rangers");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn multi_should_join_ids() -> anyhow::Result<()> {
        assert_path("/football/fixtures/multi/1,2,3", |client| {
            client.fixtures.fixtures_by_ids(&[1, 2, 3], &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn between_should_render_iso_dates() -> anyhow::Result<()> {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();

        assert_path("/football/fixtures/between/2024-08-01/2024-08-31", |client| {
            client
                .fixtures
                .fixtures_between(start, end, None, &Query::default())
        })
        .await?;
        assert_path(
            "/football/fixtures/between/2024-08-01/2024-08-31/62",
            |client| {
                client
                    .fixtures
                    .fixtures_between(start, end, Some(62), &Query::default())
            },
        )
        .await
    }

    #[tokio::test]
    async fn head_to_head_should_order_teams() -> anyhow::Result<()> {
        assert_path("/football/fixtures/head-to-head/53/62", |client| {
            client.fixtures.head_to_head(53, 62, &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn inplay_livescores_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/livescores/inplay", |client| {
            client.fixtures.inplay_livescores(&Query::default())
        })
        .await
    }
}

mod teams {
    use super::*;

    #[tokio::test]
    async fn search_should_put_term_in_path() -> anyhow::Result<()> {
        assert_path("/football/teams/search/Celtic", |client| {
            client.teams.search_teams("Celtic", &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn dot_search_term_should_fail_without_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;

        let listing = server.mock(|when, then| {
            when.method(GET).path("/football/teams/");
            then.status(StatusCode::OK)
                .json_body(json!({"data": [{"id": 53}]}));
        });

        let error = client
            .teams
            .search_teams("..", &Query::default())
            .try_collect::<Vec<_>>()
            .await
            .unwrap_err();

        assert_eq!(error.kind(), Kind::Config);
        listing.assert_calls(0);

        Ok(())
    }

    #[tokio::test]
    async fn squad_by_season_and_team_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/squads/seasons/19735/teams/53", |client| {
            client
                .teams
                .squad_by_season_and_team(19_735, 53, &Query::default())
        })
        .await
    }
}

mod leagues {
    use super::*;

    #[tokio::test]
    async fn current_leagues_by_team_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/leagues/teams/53/current", |client| {
            client.leagues.current_leagues_by_team(53, &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn leagues_by_fixture_date_should_be_requested() -> anyhow::Result<()> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        assert_path("/football/leagues/date/2024-03-09", |client| {
            client.leagues.leagues_by_fixture_date(date, &Query::default())
        })
        .await
    }
}

mod standings {
    use super::*;

    #[tokio::test]
    async fn by_season_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/standings/seasons/19735", |client| {
            client.standings.standings_by_season(19_735, &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn topscorers_by_stage_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/topscorers/stages/77457866", |client| {
            client
                .standings
                .topscorers_by_stage(77_457_866, &Query::default())
        })
        .await
    }
}

mod other {
    use super::*;

    #[tokio::test]
    async fn probabilities_should_be_requested() -> anyhow::Result<()> {
        assert_path(
            "/football/predictions/probabilities/fixtures/19135003",
            |client| {
                client
                    .other
                    .probabilities_by_fixture(19_135_003, &Query::default())
            },
        )
        .await
    }

    #[tokio::test]
    async fn tv_stations_should_be_requested() -> anyhow::Result<()> {
        assert_path("/football/tv-stations", |client| {
            client.other.tv_stations(&Query::default())
        })
        .await
    }
}

mod core_data {
    use super::*;

    #[tokio::test]
    async fn countries_should_skip_sport_segment() -> anyhow::Result<()> {
        assert_path("/core/countries", |client| {
            client.core.countries(&Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn bookmakers_should_be_served_from_root() -> anyhow::Result<()> {
        assert_path("/odds/bookmakers/2", |client| {
            client.core.bookmaker_by_id(2, &Query::default())
        })
        .await
    }

    #[tokio::test]
    async fn paginated_core_listing_should_follow_links() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::client(&server)?;
        let next_page = format!("{}/core/types?page=2", server.base_url());

        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/core/types")
                .query_param("select", "name,code");
            then.status(StatusCode::OK).json_body(json!({
                "data": [{"id": 14, "code": "GOAL"}],
                "pagination": {"count": 1, "per_page": 1, "current_page": 1,
                               "next_page": next_page, "has_more": true}
            }));
        });
        let second = server.mock(|when, then| {
            when.method(GET).path("/core/types").query_param("page", "2");
            then.status(StatusCode::OK).json_body(json!({
                "data": [{"id": 15, "code": "OWNGOAL"}],
                "pagination": {"count": 1, "per_page": 1, "current_page": 2,
                               "next_page": null, "has_more": false}
            }));
        });

        let query = Query::builder()
            .select(vec!["name".to_owned(), "code".to_owned()])
            .build();
        let records: Vec<Record> = client.core.types(&query).try_collect().await?;

        assert_eq!(common::ids(&records), vec![14, 15]);
        first.assert();
        second.assert();

        Ok(())
    }
}

//! Pre-match, in-play and premium odds.
//!
//! The fixture-scoped methods narrow the result by bookmaker or by market. When both are given
//! the bookmaker wins: the market is ignored and the bookmaker-scoped path is requested.
//!
//! | Method | Path |
//! |--------|------|
//! | [`OddsClient::prematch_odds`] | `odds/pre-match` |
//! | [`OddsClient::fixture_prematch_odds`] | `odds/pre-match/fixtures/{id}[/bookmakers/{id} \| /markets/{id}]` |
//! | [`OddsClient::latest_prematch_odds`] | `odds/pre-match/latest` |
//! | [`OddsClient::inplay_odds`] | `odds/inplay` |
//! | [`OddsClient::fixture_inplay_odds`] | `odds/inplay/fixtures/{id}[/bookmakers/{id} \| /markets/{id}]` |
//! | [`OddsClient::latest_inplay_odds`] | `odds/inplay/latest` |
//! | [`OddsClient::premium_fixture_prematch_odds`] | `odds/premium/pre-match/fixtures/{id}[/bookmakers/{id} \| /markets/{id}]` |

use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;

const PREMATCH: &str = "odds/pre-match";
const INPLAY: &str = "odds/inplay";
const PREMIUM_PREMATCH: &str = "odds/premium/pre-match";

/// Client for the odds endpoints of one sport.
#[derive(Clone, Debug)]
pub struct OddsClient {
    fetcher: Fetcher,
}

impl OddsClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Streams all available pre-match odds.
    pub fn prematch_odds(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch(PREMATCH, query)
    }

    /// Streams pre-match odds for one fixture, optionally narrowed to a bookmaker or a market.
    ///
    /// `bookmaker_id` takes precedence over `market_id`. Only `None` counts as "not given": an id
    /// of `Some(0)` still selects the bookmaker- or market-scoped path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::TryStreamExt as _;
    /// use sportmonks_client_sdk::{Client, types::Query};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("football", "my-token")?;
    ///
    /// // Requests odds/pre-match/fixtures/19135003/markets/1
    /// let mut odds = client
    ///     .odds
    ///     .fixture_prematch_odds(19_135_003, None, Some(1), &Query::default());
    ///
    /// while let Some(odd) = odds.try_next().await? {
    ///     println!("{:?} {:?}", odd.get("label"), odd.get("value"));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn fixture_prematch_odds(
        &self,
        fixture_id: u64,
        bookmaker_id: Option<u64>,
        market_id: Option<u64>,
        query: &Query,
    ) -> RecordStream {
        let path = fixture_odds_path(PREMATCH, fixture_id, bookmaker_id, market_id);
        self.fetcher.fetch(&path, query)
    }

    /// Streams pre-match odds updated within the last 10 seconds.
    pub fn latest_prematch_odds(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("{PREMATCH}/latest"), query)
    }

    /// Streams all available in-play odds.
    pub fn inplay_odds(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch(INPLAY, query)
    }

    /// Streams in-play odds for one fixture, optionally narrowed to a bookmaker or a market.
    ///
    /// `bookmaker_id` takes precedence over `market_id`.
    pub fn fixture_inplay_odds(
        &self,
        fixture_id: u64,
        bookmaker_id: Option<u64>,
        market_id: Option<u64>,
        query: &Query,
    ) -> RecordStream {
        let path = fixture_odds_path(INPLAY, fixture_id, bookmaker_id, market_id);
        self.fetcher.fetch(&path, query)
    }

    /// Streams in-play odds updated within the last 10 seconds.
    pub fn latest_inplay_odds(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("{INPLAY}/latest"), query)
    }

    /// Streams pre-match odds for one fixture from the Premium feed, optionally narrowed to a
    /// bookmaker or a market.
    ///
    /// `bookmaker_id` takes precedence over `market_id`. See
    /// <https://docs.sportmonks.com/football/endpoints-and-entities/endpoints/premium-odds-feed>.
    pub fn premium_fixture_prematch_odds(
        &self,
        fixture_id: u64,
        bookmaker_id: Option<u64>,
        market_id: Option<u64>,
        query: &Query,
    ) -> RecordStream {
        let path = fixture_odds_path(PREMIUM_PREMATCH, fixture_id, bookmaker_id, market_id);
        self.fetcher.fetch(&path, query)
    }
}

fn fixture_odds_path(
    feed: &str,
    fixture_id: u64,
    bookmaker_id: Option<u64>,
    market_id: Option<u64>,
) -> String {
    match (bookmaker_id, market_id) {
        (Some(bookmaker_id), _) => {
            format!("{feed}/fixtures/{fixture_id}/bookmakers/{bookmaker_id}")
        }
        (None, Some(market_id)) => format!("{feed}/fixtures/{fixture_id}/markets/{market_id}"),
        (None, None) => format!("{feed}/fixtures/{fixture_id}"),
    }
}

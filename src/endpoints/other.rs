use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;

/// Client for the remaining sport-scoped endpoints: venues, referees, states, transfers, news,
/// TV stations, expected goals, predictions, rivals and commentaries.
#[derive(Clone, Debug)]
pub struct OtherClient {
    fetcher: Fetcher,
}

impl OtherClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn venues(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("venues", query)
    }

    pub fn venue_by_id(&self, venue_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("venues/{venue_id}"), query)
    }

    pub fn venues_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("venues/seasons/{season_id}"), query)
    }

    pub fn referees(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("referees", query)
    }

    pub fn referee_by_id(&self, referee_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("referees/{referee_id}"), query)
    }

    /// Streams the fixture states (`NS`, `INPLAY_1ST_HALF`, `FT`, ...).
    pub fn states(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("states", query)
    }

    pub fn transfers(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("transfers", query)
    }

    pub fn latest_transfers(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("transfers/latest", query)
    }

    pub fn transfers_by_player(&self, player_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("transfers/players/{player_id}"), query)
    }

    pub fn prematch_news(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("news/pre-match", query)
    }

    pub fn postmatch_news(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("news/post-match", query)
    }

    pub fn tv_stations(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("tv-stations", query)
    }

    /// Streams expected-goals values of every fixture.
    pub fn expected_by_fixtures(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("expected/fixtures", query)
    }

    /// Streams predicted outcome probabilities for `fixture_id`.
    pub fn probabilities_by_fixture(&self, fixture_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(
            &format!("predictions/probabilities/fixtures/{fixture_id}"),
            query,
        )
    }

    pub fn rivals_by_team(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("rivals/teams/{team_id}"), query)
    }

    /// Streams the textual commentary of `fixture_id`.
    pub fn commentaries_by_fixture(&self, fixture_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("commentaries/fixtures/{fixture_id}"), query)
    }
}

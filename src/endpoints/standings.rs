use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;

/// Client for standings and topscorers of one sport.
#[derive(Clone, Debug)]
pub struct StandingsClient {
    fetcher: Fetcher,
}

impl StandingsClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn standings(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("standings", query)
    }

    /// Streams the full standing table of `season_id`.
    pub fn standings_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("standings/seasons/{season_id}"), query)
    }

    /// Streams the standing table as it was after `round_id`.
    pub fn standings_by_round(&self, round_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("standings/rounds/{round_id}"), query)
    }

    /// Streams point deductions and other corrections applied in `season_id`.
    pub fn standing_corrections_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("standings/corrections/seasons/{season_id}"), query)
    }

    /// Streams the live standing table of `league_id`, updated while fixtures are in play.
    pub fn live_standings_by_league(&self, league_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("standings/live/leagues/{league_id}"), query)
    }

    pub fn topscorers_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("topscorers/seasons/{season_id}"), query)
    }

    pub fn topscorers_by_stage(&self, stage_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("topscorers/stages/{stage_id}"), query)
    }
}

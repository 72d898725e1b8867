use super::search;
use crate::fetcher::{Fetcher, RecordStream};
use crate::types::NaiveDate;
use crate::types::request::Query;

/// Client for leagues, seasons, rounds and stages of one sport.
#[derive(Clone, Debug)]
pub struct LeaguesClient {
    fetcher: Fetcher,
}

impl LeaguesClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Streams every league available to the subscription.
    pub fn leagues(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("leagues", query)
    }

    pub fn league_by_id(&self, league_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("leagues/{league_id}"), query)
    }

    /// Streams leagues that have fixtures being played right now.
    pub fn live_leagues(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("leagues/live", query)
    }

    /// Streams leagues with fixtures on `date`.
    pub fn leagues_by_fixture_date(&self, date: NaiveDate, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("leagues/date/{date}"), query)
    }

    pub fn leagues_by_country(&self, country_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("leagues/countries/{country_id}"), query)
    }

    pub fn search_leagues(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "leagues", name, query)
    }

    /// Streams every league `team_id` has ever played in.
    pub fn leagues_by_team(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("leagues/teams/{team_id}"), query)
    }

    /// Streams the leagues `team_id` currently plays in.
    pub fn current_leagues_by_team(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("leagues/teams/{team_id}/current"), query)
    }

    pub fn seasons(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("seasons", query)
    }

    pub fn season_by_id(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("seasons/{season_id}"), query)
    }

    pub fn seasons_by_team(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("seasons/teams/{team_id}"), query)
    }

    /// Streams seasons whose name matches `name`, e.g. `2023/2024`.
    pub fn search_seasons(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "seasons", name, query)
    }

    pub fn round_by_id(&self, round_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("rounds/{round_id}"), query)
    }

    pub fn rounds_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("rounds/seasons/{season_id}"), query)
    }

    pub fn stages_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("stages/seasons/{season_id}"), query)
    }
}

use super::search;
use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;

/// Client for teams, players, squads and coaches of one sport.
#[derive(Clone, Debug)]
pub struct TeamsClient {
    fetcher: Fetcher,
}

impl TeamsClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn teams(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("teams", query)
    }

    pub fn team_by_id(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("teams/{team_id}"), query)
    }

    pub fn teams_by_country(&self, country_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("teams/countries/{country_id}"), query)
    }

    /// Streams the teams taking part in `season_id`.
    pub fn teams_by_season(&self, season_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("teams/seasons/{season_id}"), query)
    }

    pub fn search_teams(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "teams", name, query)
    }

    pub fn players(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("players", query)
    }

    pub fn player_by_id(&self, player_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("players/{player_id}"), query)
    }

    pub fn players_by_country(&self, country_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("players/countries/{country_id}"), query)
    }

    pub fn search_players(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "players", name, query)
    }

    /// Streams players updated within the last two hours.
    pub fn latest_players(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("players/latest", query)
    }

    /// Streams the current squad of `team_id`.
    pub fn squad_by_team(&self, team_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("squads/teams/{team_id}"), query)
    }

    /// Streams the squad `team_id` registered for `season_id`.
    pub fn squad_by_season_and_team(
        &self,
        season_id: u64,
        team_id: u64,
        query: &Query,
    ) -> RecordStream {
        self.fetcher.fetch(
            &format!("squads/seasons/{season_id}/teams/{team_id}"),
            query,
        )
    }

    pub fn coaches(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("coaches", query)
    }

    pub fn coach_by_id(&self, coach_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("coaches/{coach_id}"), query)
    }
}

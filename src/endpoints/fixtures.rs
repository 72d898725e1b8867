use super::{join_ids, search};
use crate::fetcher::{Fetcher, RecordStream};
use crate::types::NaiveDate;
use crate::types::request::Query;

/// Client for fixtures and livescores of one sport.
#[derive(Clone, Debug)]
pub struct FixturesClient {
    fetcher: Fetcher,
}

impl FixturesClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Streams every fixture available to the subscription.
    pub fn fixtures(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("fixtures", query)
    }

    /// Streams the single fixture `fixture_id`.
    pub fn fixture_by_id(&self, fixture_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("fixtures/{fixture_id}"), query)
    }

    /// Streams several fixtures by id in one request.
    pub fn fixtures_by_ids(&self, fixture_ids: &[u64], query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("fixtures/multi/{}", join_ids(fixture_ids)), query)
    }

    /// Streams the fixtures played on `date`.
    pub fn fixtures_by_date(&self, date: NaiveDate, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("fixtures/date/{date}"), query)
    }

    /// Streams the fixtures between two dates, optionally only those of `team_id`.
    ///
    /// The API limits the range to 100 days.
    pub fn fixtures_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        team_id: Option<u64>,
        query: &Query,
    ) -> RecordStream {
        let path = match team_id {
            Some(team_id) => format!("fixtures/between/{start}/{end}/{team_id}"),
            None => format!("fixtures/between/{start}/{end}"),
        };
        self.fetcher.fetch(&path, query)
    }

    /// Streams the head-to-head history of two teams.
    pub fn head_to_head(&self, team_id: u64, opponent_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(
            &format!("fixtures/head-to-head/{team_id}/{opponent_id}"),
            query,
        )
    }

    /// Streams fixtures whose name matches `name`.
    pub fn search_fixtures(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "fixtures", name, query)
    }

    /// Streams upcoming fixtures that have odds for `market_id`.
    pub fn upcoming_fixtures_by_market(&self, market_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("fixtures/upcoming/markets/{market_id}"), query)
    }

    /// Streams fixtures updated within the last 10 seconds.
    pub fn latest_fixtures(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("fixtures/latest", query)
    }

    /// Streams the fixtures of the current day, from 15 minutes before kick-off until 15 minutes
    /// after the final whistle.
    pub fn livescores(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("livescores", query)
    }

    /// Streams fixtures that are currently being played.
    pub fn inplay_livescores(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("livescores/inplay", query)
    }

    /// Streams livescores updated within the last 10 seconds.
    pub fn latest_livescores(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("livescores/latest", query)
    }
}

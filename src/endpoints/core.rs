//! Sport-independent reference data, served from the API root rather than a sport segment.

use super::search;
use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;

/// Client for the core endpoints shared by every sport.
#[derive(Clone, Debug)]
pub struct CoreClient {
    fetcher: Fetcher,
}

impl CoreClient {
    pub(crate) fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher behind this client, for endpoints not wrapped here.
    #[must_use]
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn continents(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/continents", query)
    }

    pub fn countries(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/countries", query)
    }

    pub fn country_by_id(&self, country_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("core/countries/{country_id}"), query)
    }

    pub fn search_countries(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "core/countries", name, query)
    }

    pub fn regions(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/regions", query)
    }

    pub fn cities(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/cities", query)
    }

    pub fn search_cities(&self, name: &str, query: &Query) -> RecordStream {
        search(&self.fetcher, "core/cities", name, query)
    }

    /// Streams every type definition (event types, statistic types, ...) used across the API.
    pub fn types(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/types", query)
    }

    pub fn type_by_id(&self, type_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("core/types/{type_id}"), query)
    }

    pub fn timezones(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("core/timezones", query)
    }

    /// Streams the filters each entity supports, for building [`Query::filter`].
    pub fn entity_filters(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("my/filters/entity", query)
    }

    pub fn bookmakers(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("odds/bookmakers", query)
    }

    pub fn bookmaker_by_id(&self, bookmaker_id: u64, query: &Query) -> RecordStream {
        self.fetcher
            .fetch(&format!("odds/bookmakers/{bookmaker_id}"), query)
    }

    pub fn markets(&self, query: &Query) -> RecordStream {
        self.fetcher.fetch("odds/markets", query)
    }

    pub fn market_by_id(&self, market_id: u64, query: &Query) -> RecordStream {
        self.fetcher.fetch(&format!("odds/markets/{market_id}"), query)
    }
}

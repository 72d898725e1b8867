//! Endpoint groups of the SportMonks v3 API.
//!
//! Every method maps its arguments to a path, hands that path and the caller's [`Query`] to the
//! shared [`Fetcher`](crate::Fetcher) and returns the resulting lazy
//! [`RecordStream`](crate::RecordStream). No method issues a request until its stream is polled.
//!
//! | Client | Base | Covers |
//! |--------|------|--------|
//! | [`FixturesClient`] | sport | fixtures, livescores |
//! | [`OddsClient`] | sport | pre-match, in-play and premium odds |
//! | [`TeamsClient`] | sport | teams, players, squads, coaches |
//! | [`LeaguesClient`] | sport | leagues, seasons, rounds, stages |
//! | [`StandingsClient`] | sport | standings, topscorers |
//! | [`OtherClient`] | sport | venues, referees, states, transfers, news, TV stations, ... |
//! | [`CoreClient`] | root | continents, countries, regions, cities, types, bookmakers, markets |
//!
//! [`Query`]: crate::types::Query

#![allow(
    clippy::module_name_repetitions,
    reason = "Client suffix mirrors the field names on crate::Client"
)]

pub mod core;
pub mod fixtures;
pub mod leagues;
pub mod odds;
pub mod other;
pub mod standings;
pub mod teams;

pub use self::core::CoreClient;
pub use fixtures::FixturesClient;
pub use leagues::LeaguesClient;
pub use odds::OddsClient;
pub use other::OtherClient;
pub use standings::StandingsClient;
pub use teams::TeamsClient;

use futures::{StreamExt as _, future, stream};

use crate::error::Error;
use crate::fetcher::{Fetcher, RecordStream};
use crate::types::request::Query;
use crate::Result;

/// `,`-joined ids for the `multi` endpoints.
fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Streams `{resource}/search/{term}`, or a single
/// [`Kind::Config`](crate::error::Kind::Config) error when `term` cannot be a search segment.
fn search(fetcher: &Fetcher, resource: &str, term: &str, query: &Query) -> RecordStream {
    match search_segment(term) {
        Ok(segment) => fetcher.fetch(&format!("{resource}/search/{segment}"), query),
        Err(e) => stream::once(future::ready(Err(e))).boxed(),
    }
}

/// Percent-encodes a free-text search term as a single path segment.
///
/// Empty terms and the dot segments `.` and `..` are rejected: URL normalisation would drop them
/// and turn the search into a plain listing.
fn search_segment(term: &str) -> Result<String> {
    let term = term.trim();
    if matches!(term, "" | "." | "..") {
        return Err(Error::config(format!("{term:?} is not a usable search term")));
    }

    // Form encoding turns spaces into `+` and a literal `+` into `%2B`, so this swap is exact.
    Ok(url::form_urlencoded::byte_serialize(term.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, Same, serde_as};

use crate::serde_helpers::one_or_many;

/// Metadata scalar that also accepts its string form (`"10"`) and falls back to `None` on
/// anything else, so a surprising counter never costs the page its records.
type Lenient = DefaultOnError<Option<PickFirst<(Same, DisplayFromStr)>>>;

/// One API resource instance (fixture, team, odds line, ...), passed through untouched.
pub type Record = Map<String, Value>;

/// The envelope of a single SportMonks response.
///
/// List endpoints return `data` as an array; by-id endpoints return a single object, which is
/// surfaced here as a one-element list. Queries with no matches come back with a `message` and no
/// `data` at all, which yields an empty list.
///
/// Only `data` and `pagination.next_page` can fail a page. The remaining metadata is decoded
/// best-effort and left unset when the API sends something unexpected.
#[serde_as]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    #[serde(default, deserialize_with = "one_or_many")]
    pub data: Vec<Record>,
    pub pagination: Option<Pagination>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub rate_limit: Option<RateLimit>,
    /// Plan details for the token, kept opaque.
    #[serde(default)]
    pub subscription: Value,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub message: Option<String>,
}

impl Page {
    /// The link to follow for the next page, if any.
    ///
    /// `null`, missing and empty links all mean this is the last page.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.pagination
            .as_ref()?
            .next_page
            .as_deref()
            .filter(|link| !link.is_empty())
    }
}

#[serde_as]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub count: Option<u64>,
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub per_page: Option<u64>,
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub current_page: Option<u64>,
    /// Absolute URL of the next page, including whatever parameters the API wants repeated.
    pub next_page: Option<String>,
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub has_more: Option<bool>,
}

/// Remaining request budget for the entity that was just queried.
#[serde_as]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimit {
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub resets_in_seconds: Option<u64>,
    #[serde_as(deserialize_as = "Lenient")]
    #[serde(default)]
    pub remaining: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub requested_entity: Option<String>,
}

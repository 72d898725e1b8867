use std::fmt;

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use crate::serde_helpers::SemicolonSeparator;

/// Query parameters accepted by every SportMonks endpoint.
///
/// Empty lists and unset options are left out of the query string entirely.
///
/// | Field | Encoding |
/// |-------|----------|
/// | `include` | `;`-joined relation names, e.g. `participants;events.type` |
/// | `select` | `,`-joined field names, e.g. `name,starting_at` |
/// | `filter` | `;`-joined [`Filter`]s, each rendered `name:v1,v2` |
///
/// # Example
///
/// ```
/// use sportmonks_client_sdk::types::{Filter, Order, Query};
///
/// let query = Query::builder()
///     .include(vec!["participants".to_owned(), "scores".to_owned()])
///     .filter(vec![Filter::new("fixtureLeagues", [501, 271])])
///     .order(Order::Desc)
///     .build();
/// ```
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Builder, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Query {
    /// Related entities to embed in each record.
    #[serde_as(as = "StringWithSeparator::<SemicolonSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    /// Fields to keep on the base entity.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,
    /// Result subset filters.
    #[serde_as(as = "StringWithSeparator::<SemicolonSeparator, Filter>")]
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Filter>,
    /// Page to start from. Later pages are reached through the `next_page` link.
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order: Option<Order>,
    #[builder(into)]
    pub locale: Option<String>,
    #[builder(into)]
    pub timezone: Option<String>,
}

/// A single `filter` entry, rendered `name:v1,v2`, or just `name` when it carries no values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

impl Filter {
    /// Creates a filter such as `Filter::new("eventTypes", [14, 19])`.
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Creates a value-less filter such as `populate` or `deleted`.
    pub fn flag<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.name, self.values.join(","))
        }
    }
}

/// Sort direction applied by the API to list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Order {
    Asc,
    Desc,
}

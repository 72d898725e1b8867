//! Request and response types shared by every endpoint client.
//!
//! - **Request types**: [`request::Query`], the `include` / `select` / `filter` parameters (plus
//!   paging and localisation knobs) accepted by every SportMonks endpoint.
//!
//! - **Response types**: [`response::Page`], the envelope of one HTTP response, and
//!   [`response::Record`], a single untyped resource.
//!
//! Commonly used types from external crates are re-exported here so callers don't need to add
//! these dependencies to their `Cargo.toml`.

pub mod request;
pub mod response;

/// Calendar date used by the date-scoped endpoints, rendered as `YYYY-MM-DD`.
pub use chrono::NaiveDate;
/// Arbitrary JSON value held inside a [`response::Record`].
pub use serde_json::Value;

pub use request::{Filter, Order, Query};
pub use response::{Page, Pagination, RateLimit, Record};

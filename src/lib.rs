#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetcher;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::Request;
use serde::Serialize;

pub use crate::client::{Client, Config};
use crate::error::Error;
pub use crate::fetcher::{Fetcher, PageStream, RecordStream};
use crate::types::response::Page;

pub type Result<T> = std::result::Result<T, Error>;

/// Root of the SportMonks v3 API. Sport clients live under `{BASE_URL}{sport}/`, the core
/// client directly under it.
pub const BASE_URL: &str = "https://api.sportmonks.com/v3/";

/// Environment variable read by [`Client::from_env`].
pub const API_TOKEN_VAR: &str = "SPORTMONKS_API_TOKEN";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> Result<String> {
        let params = serde_html_form::to_string(self).inspect_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Unable to convert to URL-encoded string {e:?}");
            #[cfg(not(feature = "tracing"))]
            let _: &serde_html_form::ser::Error = e;
        })?;

        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{params}"))
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<Page> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let body = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, body));
    }

    let body = response.bytes().await?;
    let page: Page = serde_helpers::deserialize_with_warnings(&body)?;

    #[cfg(feature = "tracing")]
    if let Some(limit) = &page.rate_limit {
        tracing::debug!(
            method = %method,
            path = %path,
            records = page.data.len(),
            remaining = ?limit.remaining,
            resets_in_seconds = ?limit.resets_in_seconds,
            entity = ?limit.requested_entity,
            "page received"
        );
    }

    Ok(page)
}

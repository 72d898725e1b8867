//! The paginated fetch layer every endpoint client sits on.
//!
//! A [`Fetcher`] owns a base [`Url`] and an HTTP client carrying the API token. It turns a
//! `(path, query)` pair into a lazy stream: the first request goes out on the first poll, each
//! following page is requested only once the caller has consumed the previous one, and dropping
//! the stream stops everything.
//!
//! # Example
//!
//! ```no_run
//! use futures::TryStreamExt as _;
//! use sportmonks_client_sdk::{Fetcher, types::Query};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::new("https://api.sportmonks.com/v3/football/", "my-token")?;
//!
//! let mut fixtures = fetcher.fetch("fixtures", &Query::default());
//! while let Some(fixture) = fixtures.try_next().await? {
//!     println!("{:?}", fixture.get("name"));
//! }
//! # Ok(())
//! # }
//! ```

use async_stream::try_stream;
use futures::stream::{self, BoxStream};
use futures::{Stream, StreamExt as _, TryStreamExt as _};
use reqwest::{Client as ReqwestClient, Method};
use url::Url;

use crate::client::{Config, http_client};
use crate::error::{Error, Kind};
use crate::types::request::Query;
use crate::types::response::{Page, Record};
use crate::{Result, ToQueryParams as _};

/// Lazy sequence of records, concatenated across pages in the order the API returned them.
pub type RecordStream = BoxStream<'static, Result<Record>>;

/// Lazy sequence of whole pages, for callers that need pagination or rate-limit metadata.
pub type PageStream = BoxStream<'static, Result<Page>>;

/// Issues GET requests against a base URL and follows `pagination.next_page` links.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Fetcher {
    host: Url,
    client: ReqwestClient,
}

impl Fetcher {
    /// Creates a fetcher for `base_url` using the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Config`](crate::error::Kind::Config) error if the URL is invalid or
    /// the token is empty or not usable as a header value.
    pub fn new(base_url: &str, api_token: &str) -> Result<Fetcher> {
        let client = http_client(api_token, &Config::default())?;

        Ok(Self::from_parts(parse_base_url(base_url)?, client))
    }

    pub(crate) fn from_parts(host: Url, client: ReqwestClient) -> Fetcher {
        Self { host, client }
    }

    /// Returns the base URL every path is resolved against.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Streams every record of `path`, following pagination until the last page.
    ///
    /// Nothing is requested until the stream is first polled. An error ends the stream; records
    /// yielded before it stay valid.
    pub fn fetch(&self, path: &str, query: &Query) -> RecordStream {
        self.pages(path, query)
            .map_ok(|page| stream::iter(page.data.into_iter().map(Ok::<Record, Error>)))
            .try_flatten()
            .boxed()
    }

    /// Streams whole pages of `path`, with the same laziness as [`Self::fetch`].
    pub fn pages(&self, path: &str, query: &Query) -> PageStream {
        let first = self.endpoint(path, query);

        self.clone().page_stream(first).boxed()
    }

    /// Fetches only the first page of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-success status, or the
    /// body is not valid JSON.
    pub async fn page(&self, path: &str, query: &Query) -> Result<Page> {
        let url = self.endpoint(path, query)?;
        self.get(url).await
    }

    fn page_stream(self, first: Result<Url>) -> impl Stream<Item = Result<Page>> + Send + 'static {
        try_stream! {
            let mut next = Some(first?);

            while let Some(url) = next.take() {
                let page = self.get(url).await?;
                let link = page.next_page().map(str::to_owned);

                yield page;

                // Followed as given: the link already carries whatever the API needs.
                next = link.map(|link| self.next_url(&link)).transpose()?;
            }
        }
    }

    fn endpoint(&self, path: &str, query: &Query) -> Result<Url> {
        let query = query.query_params()?;
        let path = path.trim_start_matches('/');

        Ok(Url::parse(&format!("{}{path}{query}", self.host))?)
    }

    /// Resolves a `next_page` link against the host. A link that is not a URL is a malformed
    /// response, not a configuration problem.
    fn next_url(&self, link: &str) -> Result<Url> {
        self.host.join(link).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(link = %link, error = %e, "unusable next_page link");

            Error::with_source(Kind::Decode, e)
        })
    }

    async fn get(&self, url: Url) -> Result<Page> {
        let request = self.client.request(Method::GET, url).build()?;

        crate::request(&self.client, request).await
    }
}

/// Parses a base URL, appending the trailing `/` that relative joins rely on.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return Err(Error::config("base url must not be empty"));
    }

    let url = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{base_url}/"))?
    };

    if url.cannot_be_a_base() {
        return Err(Error::config(format!("{base_url} cannot be used as a base url")));
    }

    Ok(url)
}

//! The composition root: one [`Client`] per sport, exposing every endpoint group as a field.
//!
//! # Example
//!
//! ```no_run
//! use futures::TryStreamExt as _;
//! use sportmonks_client_sdk::{Client, types::Query};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("football", "my-token")?;
//!
//! let odds: Vec<_> = client
//!     .odds
//!     .fixture_prematch_odds(19_135_003, Some(2), None, &Query::default())
//!     .try_collect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::env;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient,
    header::{self, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};

use crate::endpoints::{
    CoreClient, FixturesClient, LeaguesClient, OddsClient, OtherClient, StandingsClient,
    TeamsClient,
};
use crate::error::Error;
use crate::fetcher::{Fetcher, parse_base_url};
use crate::{API_TOKEN_VAR, BASE_URL, Result};

const DEFAULT_USER_AGENT: &str = concat!("sportmonks-client-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Root of the API. Defaults to [`BASE_URL`]; override it to point at a mock server.
    #[builder(into, default = BASE_URL.to_owned())]
    base_url: String,
    /// Total timeout applied to each page request. Unset by default, leaving the transport's
    /// own behaviour in place.
    timeout: Option<Duration>,
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Entry point to the SportMonks API for one sport.
///
/// `core` targets the sport-independent root (`{base_url}`); every other field targets
/// `{base_url}{sport}/`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Client {
    pub fixtures: FixturesClient,
    pub odds: OddsClient,
    pub teams: TeamsClient,
    pub leagues: LeaguesClient,
    pub standings: StandingsClient,
    pub other: OtherClient,
    pub core: CoreClient,
    sport: String,
}

impl Client {
    /// Creates a client for `sport` (e.g. `football`) with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Config`](crate::error::Kind::Config) error if `sport` is not a single
    /// path segment or the token is empty or not usable as a header value.
    pub fn new(sport: &str, api_token: &str) -> Result<Client> {
        Self::with_config(sport, api_token, Config::default())
    }

    /// Creates a client reading the token from [`API_TOKEN_VAR`].
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Config`](crate::error::Kind::Config) error if the variable is unset or
    /// the resulting configuration is invalid.
    pub fn from_env(sport: &str) -> Result<Client> {
        let api_token = env::var(API_TOKEN_VAR)
            .map_err(|e| Error::config(format!("{API_TOKEN_VAR} is not usable: {e}")))?;

        Self::new(sport, &api_token)
    }

    /// Creates a client with an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// See [`Client::new`]; additionally fails if `config.base_url` is not a valid base URL.
    pub fn with_config(sport: &str, api_token: &str, config: Config) -> Result<Client> {
        let sport = validate_sport(sport)?;
        let client = http_client(api_token, &config)?;

        let core_host = parse_base_url(&config.base_url)?;
        let sport_host = core_host.join(&format!("{sport}/"))?;

        let sport_fetcher = Fetcher::from_parts(sport_host, client.clone());
        let core_fetcher = Fetcher::from_parts(core_host, client);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sport = %sport,
            sport_host = %sport_fetcher.host(),
            core_host = %core_fetcher.host(),
            "created SportMonks client"
        );

        Ok(Self {
            fixtures: FixturesClient::new(sport_fetcher.clone()),
            odds: OddsClient::new(sport_fetcher.clone()),
            teams: TeamsClient::new(sport_fetcher.clone()),
            leagues: LeaguesClient::new(sport_fetcher.clone()),
            standings: StandingsClient::new(sport_fetcher.clone()),
            other: OtherClient::new(sport_fetcher),
            core: CoreClient::new(core_fetcher),
            sport: sport.to_owned(),
        })
    }

    /// The sport segment this client was created for.
    #[must_use]
    pub fn sport(&self) -> &str {
        &self.sport
    }
}

fn validate_sport(sport: &str) -> Result<&str> {
    let sport = sport.trim();

    if sport.is_empty() {
        return Err(Error::config("sport must not be empty"));
    }

    if !sport
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::config(format!(
            "sport must be a single path segment, got {sport:?}"
        )));
    }

    Ok(sport)
}

/// Builds the HTTP client shared by every [`Fetcher`] of a [`Client`], with the token attached
/// as the `Authorization` header on every request.
pub(crate) fn http_client(api_token: &str, config: &Config) -> Result<ReqwestClient> {
    let api_token = SecretString::from(api_token.trim().to_owned());
    if api_token.expose_secret().is_empty() {
        return Err(Error::config("api token must not be empty"));
    }

    let mut authorization = HeaderValue::from_str(api_token.expose_secret())?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = ReqwestClient::builder().default_headers(headers);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

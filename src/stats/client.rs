//! Clients for the NHL stats API.
//!
//! # Example
//!
//! ```no_run
//! use nhl_stats_client::stats::{Client, types::request::TeamsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = TeamsRequest::builder()
//!     .expand("team.venue")
//!     .build();
//!
//! let doc = client.teams(&request).await?;
//! for team in doc.props().field("teams")?.as_array().into_iter().flatten() {
//!     println!(
//!         "{} {}",
//!         team.field("id")?.as_i64().unwrap_or_default(),
//!         team.field("name")?.as_str().unwrap_or_default(),
//!     );
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::Result;
use crate::error::Error;
use crate::params::{GameId, Param};
use crate::props::Document;

use super::endpoint::{self, Endpoint};
use super::types::request::{PeopleRequest, ScheduleRequest, StandingsRequest, TeamsRequest};

/// Base origin of the NHL stats API.
pub const NHL_HOST: &str = "https://statsapi.web.nhl.com";

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", HeaderValue::from_static("nhl_stats_client"));
    headers.insert("Accept", HeaderValue::from_static("application/json"));
    headers
}

/// Asynchronous HTTP client for the NHL stats API.
///
/// One method per endpoint plus the [`get`](Client::get) escape hatch. Every
/// method performs exactly one GET and returns the decoded response as a
/// [`Document`]; nothing is retried or cached.
///
/// # Example
///
/// ```no_run
/// use nhl_stats_client::stats::Client;
///
/// // Create client with the NHL origin
/// let client = Client::default();
///
/// // Or with a custom endpoint
/// let client = Client::new("https://custom-api.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(NHL_HOST).expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client against a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<Client> {
        let client = reqwest::Client::builder()
            .default_headers(default_headers())
            .build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, endpoint),
            fields(path = %endpoint.path(), status_code)
        )
    )]
    async fn fetch(&self, endpoint: Endpoint) -> Result<Document> {
        let url = endpoint.url(&self.host)?;
        let response = self.client.get(url.clone()).send().await?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        if !status_code.is_success() {
            let message = response.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                url = %url,
                message = %message,
                "API request failed"
            );

            return Err(Error::status(status_code, url.to_string(), message));
        }

        let value = response.json::<Value>().await?;
        Ok(Document::new(value))
    }

    /// Gets the list of teams, optionally filtered and expanded.
    pub async fn teams(&self, request: &TeamsRequest) -> Result<Document> {
        self.fetch(endpoint::teams(request)).await
    }

    /// Gets a team's stats.
    pub async fn team_stats(&self, team_id: i64) -> Result<Document> {
        self.fetch(endpoint::team_stats(team_id)).await
    }

    /// Gets a game's boxscore.
    pub async fn boxscore(&self, game_id: GameId) -> Result<Document> {
        self.fetch(endpoint::boxscore(game_id)).await
    }

    /// Gets detailed media information about a game.
    pub async fn content(&self, game_id: GameId) -> Result<Document> {
        self.fetch(endpoint::content(game_id)).await
    }

    /// Gets the list of divisions, or a single division by id.
    pub async fn divisions(&self, id: Option<i64>) -> Result<Document> {
        self.fetch(endpoint::divisions(id)).await
    }

    /// Gets the list of conferences, or a single conference by id.
    pub async fn conferences(&self, id: Option<i64>) -> Result<Document> {
        self.fetch(endpoint::conferences(id)).await
    }

    /// Gets information about a player, optionally with stats for a season.
    pub async fn people(&self, request: &PeopleRequest) -> Result<Document> {
        self.fetch(endpoint::people(request)?).await
    }

    /// Gets the schedule, filtered by team and date or date span.
    pub async fn schedule(&self, request: &ScheduleRequest) -> Result<Document> {
        self.fetch(endpoint::schedule(request)?).await
    }

    /// Gets the league standings, for a season or as of a date.
    pub async fn standings(&self, request: &StandingsRequest) -> Result<Document> {
        self.fetch(endpoint::standings(request)?).await
    }

    /// Calls an arbitrary endpoint of the API.
    ///
    /// `template` is a path with `{}` placeholder segments filled from `args`;
    /// `query` supplies named query parameters. All values are normalized to
    /// their canonical URL form, so undocumented or future endpoints can be
    /// called without waiting for a dedicated method:
    ///
    /// ```no_run
    /// use nhl_stats_client::params::Param;
    /// use nhl_stats_client::stats::Client;
    ///
    /// # async fn example() -> nhl_stats_client::Result<()> {
    /// let client = Client::default();
    /// let doc = client
    ///     .get(
    ///         "/api/v1/teams/{}",
    ///         &[Param::from(8)],
    ///         &[("expand", Param::from(vec!["team.roster", "team.stats"]))],
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(
        &self,
        template: &str,
        args: &[Param],
        query: &[(&str, Param)],
    ) -> Result<Document> {
        self.fetch(endpoint::template(template, args, query)?).await
    }
}

/// Blocking HTTP client for the NHL stats API.
///
/// **Feature flag:** `blocking` (required to use this type)
///
/// Identical surface to [`Client`]; calls suspend the current thread instead
/// of yielding to an async runtime. The endpoint and parameter logic is
/// shared, so both clients issue byte-identical requests for the same inputs.
#[cfg(feature = "blocking")]
#[derive(Clone, Debug)]
pub struct BlockingClient {
    host: Url,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl Default for BlockingClient {
    fn default() -> Self {
        BlockingClient::new(NHL_HOST).expect("Client with default endpoint should succeed")
    }
}

#[cfg(feature = "blocking")]
impl BlockingClient {
    /// Creates a blocking client against a custom host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(host: &str) -> Result<BlockingClient> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(default_headers())
            .build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, endpoint),
            fields(path = %endpoint.path(), status_code)
        )
    )]
    fn fetch(&self, endpoint: Endpoint) -> Result<Document> {
        let url = endpoint.url(&self.host)?;
        let response = self.client.get(url.clone()).send()?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        if !status_code.is_success() {
            let message = response.text().unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                url = %url,
                message = %message,
                "API request failed"
            );

            return Err(Error::status(status_code, url.to_string(), message));
        }

        let value = response.json::<Value>()?;
        Ok(Document::new(value))
    }

    /// Gets the list of teams, optionally filtered and expanded.
    pub fn teams(&self, request: &TeamsRequest) -> Result<Document> {
        self.fetch(endpoint::teams(request))
    }

    /// Gets a team's stats.
    pub fn team_stats(&self, team_id: i64) -> Result<Document> {
        self.fetch(endpoint::team_stats(team_id))
    }

    /// Gets a game's boxscore.
    pub fn boxscore(&self, game_id: GameId) -> Result<Document> {
        self.fetch(endpoint::boxscore(game_id))
    }

    /// Gets detailed media information about a game.
    pub fn content(&self, game_id: GameId) -> Result<Document> {
        self.fetch(endpoint::content(game_id))
    }

    /// Gets the list of divisions, or a single division by id.
    pub fn divisions(&self, id: Option<i64>) -> Result<Document> {
        self.fetch(endpoint::divisions(id))
    }

    /// Gets the list of conferences, or a single conference by id.
    pub fn conferences(&self, id: Option<i64>) -> Result<Document> {
        self.fetch(endpoint::conferences(id))
    }

    /// Gets information about a player, optionally with stats for a season.
    pub fn people(&self, request: &PeopleRequest) -> Result<Document> {
        self.fetch(endpoint::people(request)?)
    }

    /// Gets the schedule, filtered by team and date or date span.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<Document> {
        self.fetch(endpoint::schedule(request)?)
    }

    /// Gets the league standings, for a season or as of a date.
    pub fn standings(&self, request: &StandingsRequest) -> Result<Document> {
        self.fetch(endpoint::standings(request)?)
    }

    /// Calls an arbitrary endpoint of the API; see [`Client::get`].
    pub fn get(&self, template: &str, args: &[Param], query: &[(&str, Param)]) -> Result<Document> {
        self.fetch(endpoint::template(template, args, query)?)
    }
}

//! NHL stats API client and request types.
//!
//! This module provides clients for the NHL statistics API, which offers
//! read-only HTTP endpoints for teams, players, schedules, standings, and
//! per-game data.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/api/v1/teams` | List teams, optionally filtered and expanded |
//! | `/api/v1/teams/{id}/stats` | Stats for one team |
//! | `/api/v1/game/{id}/boxscore` | Boxscore for one game |
//! | `/api/v1/game/{id}/content` | Media content for one game |
//! | `/api/v1/divisions[/{id}]` | List divisions, or one by id |
//! | `/api/v1/conferences[/{id}]` | List conferences, or one by id |
//! | `/api/v1/people/{id}[/stats]` | Player information, optionally with stats |
//! | `/api/v1/schedule` | Schedule, filtered by team and date(s) |
//! | `/api/v1/standings/byLeague` | League standings by season or date |
//!
//! Endpoints without a dedicated method are reachable through the
//! [`Client::get`] escape hatch.
//!
//! # Example
//!
//! ```no_run
//! use nhl_stats_client::stats::{Client, types::request::TeamsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client with the default NHL origin
//! let client = Client::default();
//!
//! // Fetch teams with their venues
//! let request = TeamsRequest::builder().expand("team.venue").build();
//! let doc = client.teams(&request).await?;
//!
//! for team in doc.props().field("teams")?.as_array().into_iter().flatten() {
//!     println!("{:?}", team.field("name")?.as_str());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default endpoint is `https://statsapi.web.nhl.com`.

pub mod client;
pub(crate) mod endpoint;
pub mod types;

#[cfg(feature = "blocking")]
pub use client::BlockingClient;
pub use client::{Client, NHL_HOST};

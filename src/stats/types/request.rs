//! Request types for the NHL stats API.
//!
//! This module contains builder-pattern structs for the endpoints that take
//! optional filters. All request types use the [`bon`](https://docs.rs/bon)
//! crate for the builder pattern. Filter values accept anything convertible
//! into [`Param`], so team ids can be integers and `expand` filters can be
//! single strings or lists.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::NaiveDate;

use crate::params::{Param, Season};

/// Request parameters for the `/teams` endpoint.
///
/// # Optional Parameters
///
/// - `id`: Restrict to one or more team ids.
/// - `expand`: Expanded information (e.g. `team.roster`), single or list.
/// - `stats`: Type of stats to include, single or list.
///
/// # Example
///
/// ```
/// use nhl_stats_client::stats::types::request::TeamsRequest;
///
/// let request = TeamsRequest::builder()
///     .id(8)
///     .expand(vec!["team.roster", "team.stats"])
///     .stats("single")
///     .build();
/// ```
#[derive(Debug, Clone, Builder, Default)]
#[non_exhaustive]
pub struct TeamsRequest {
    /// Team id(s) to filter by (sent as `teamId`).
    #[builder(into)]
    pub id: Option<Param>,
    /// Expanded information, see API docs.
    #[builder(into)]
    pub expand: Option<Param>,
    /// Type of stats to show, see API docs.
    #[builder(into)]
    pub stats: Option<Param>,
}

/// Request parameters for the `/people/{id}` endpoint.
///
/// # Required Parameters
///
/// - `id`: The player id.
///
/// # Optional Parameters
///
/// - `stats`: Kind of stats to fetch; switches the call to
///   `/people/{id}/stats`.
/// - `season`: Season to fetch stats for. Only valid together with `stats`;
///   supplying it alone fails before any request is issued.
///
/// # Example
///
/// ```
/// use nhl_stats_client::params::Season;
/// use nhl_stats_client::stats::types::request::PeopleRequest;
///
/// let request = PeopleRequest::builder()
///     .id(8471675)
///     .stats("statsSingleSeason")
///     .season(Season::from_end(2018))
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct PeopleRequest {
    /// Player id (required).
    pub id: i64,
    /// Kind of stats to fetch.
    #[builder(into)]
    pub stats: Option<Param>,
    /// Season to fetch stats for; requires `stats`.
    pub season: Option<Season>,
}

/// Request parameters for the `/schedule` endpoint.
///
/// # Optional Parameters
///
/// - `team_id`: Restrict to one team (sent as `teamId`).
/// - `expand`: Expanded information, single or list.
/// - `date`: A single date. Mutually exclusive with the range below.
/// - `start_date` / `end_date`: A date span (sent as `startDate`/`endDate`).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use nhl_stats_client::stats::types::request::ScheduleRequest;
///
/// let request = ScheduleRequest::builder()
///     .team_id(8)
///     .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2018, 6, 1).unwrap())
///     .build();
/// ```
#[derive(Debug, Clone, Builder, Default)]
#[non_exhaustive]
pub struct ScheduleRequest {
    /// Team id to filter by (sent as `teamId`).
    #[builder(into)]
    pub team_id: Option<Param>,
    /// Expanded information, see API docs.
    #[builder(into)]
    pub expand: Option<Param>,
    /// Schedule for a single date.
    pub date: Option<NaiveDate>,
    /// Start of a date span.
    pub start_date: Option<NaiveDate>,
    /// End of a date span.
    pub end_date: Option<NaiveDate>,
}

/// Request parameters for the `/standings/byLeague` endpoint.
///
/// # Optional Parameters
///
/// - `expand`: Expanded information, single or list.
/// - `season`: Standings for a whole season.
/// - `date`: Standings as of a date. Mutually exclusive with `season`.
///
/// # Example
///
/// ```
/// use nhl_stats_client::params::Season;
/// use nhl_stats_client::stats::types::request::StandingsRequest;
///
/// let request = StandingsRequest::builder()
///     .expand("standings.record")
///     .season(Season::from_begin(2017))
///     .build();
/// ```
#[derive(Debug, Clone, Builder, Default)]
#[non_exhaustive]
pub struct StandingsRequest {
    /// Expanded information, see API docs.
    #[builder(into)]
    pub expand: Option<Param>,
    /// Standings for this season.
    pub season: Option<Season>,
    /// Standings at this date.
    pub date: Option<NaiveDate>,
}

//! Types for the NHL stats API.
//!
//! This module contains the builder-pattern request structs for each API
//! endpoint, built with the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use nhl_stats_client::stats::types::request::{ScheduleRequest, TeamsRequest};
//!
//! // Simple request with defaults
//! let schedule = ScheduleRequest::builder().build();
//!
//! // Request with filters
//! let teams = TeamsRequest::builder()
//!     .id(8)
//!     .expand(vec!["team.roster", "team.stats"])
//!     .build();
//! ```
//!
//! Responses are not modelled as structs; every endpoint returns a
//! [`Document`](crate::props::Document) navigated lazily.

pub mod request;

//! Pure endpoint descriptions shared by the async and blocking clients.
//!
//! Each function here turns typed arguments into an [`Endpoint`]: validated
//! path segments plus query pairs, with every value normalized through
//! [`Param`] and absent optional filters omitted entirely. No I/O happens in
//! this module; the clients only differ in how they execute a description.

use url::Url;

use crate::Result;
use crate::error::Error;
use crate::params::{GameId, Param, UrlParam as _};

use super::types::request::{PeopleRequest, ScheduleRequest, StandingsRequest, TeamsRequest};

/// A GET request description: path segments and query pairs, both already in
/// canonical text form. Percent-encoding happens when the URL is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    fn new(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
            query: Vec::new(),
        }
    }

    fn query(mut self, key: &str, value: &Param) -> Self {
        self.query.push((key.to_owned(), value.to_url_param()));
        self
    }

    /// The omit-if-absent wrapper: absent filters never become empty-string
    /// query entries.
    fn query_opt(self, key: &str, value: Option<Param>) -> Self {
        match value {
            Some(value) => self.query(key, &value),
            None => self,
        }
    }

    /// Joins the description onto `host`, percent-encoding each path segment
    /// and query pair.
    pub(crate) fn url(&self, host: &Url) -> Result<Url> {
        let mut url = host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation("host URL cannot be a base"))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                self.query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        Ok(url)
    }

    #[cfg(feature = "tracing")]
    pub(crate) fn path(&self) -> String {
        self.segments.join("/")
    }
}

pub(crate) fn teams(request: &TeamsRequest) -> Endpoint {
    Endpoint::new("api/v1/teams")
        .query_opt("teamId", request.id.clone())
        .query_opt("expand", request.expand.clone())
        .query_opt("stats", request.stats.clone())
}

pub(crate) fn team_stats(team_id: i64) -> Endpoint {
    Endpoint::new(&format!("api/v1/teams/{team_id}/stats"))
}

pub(crate) fn boxscore(game_id: GameId) -> Endpoint {
    Endpoint::new(&format!("api/v1/game/{}/boxscore", game_id.to_url_param()))
}

pub(crate) fn content(game_id: GameId) -> Endpoint {
    Endpoint::new(&format!("api/v1/game/{}/content", game_id.to_url_param()))
}

pub(crate) fn divisions(id: Option<i64>) -> Endpoint {
    match id {
        Some(id) => Endpoint::new(&format!("api/v1/divisions/{id}")),
        None => Endpoint::new("api/v1/divisions"),
    }
}

pub(crate) fn conferences(id: Option<i64>) -> Endpoint {
    match id {
        Some(id) => Endpoint::new(&format!("api/v1/conferences/{id}")),
        None => Endpoint::new("api/v1/conferences"),
    }
}

pub(crate) fn people(request: &PeopleRequest) -> Result<Endpoint> {
    if request.season.is_some() && request.stats.is_none() {
        return Err(Error::invalid_combination(
            "the people season filter requires a stats filter",
        ));
    }
    match &request.stats {
        Some(stats) => Ok(Endpoint::new(&format!("api/v1/people/{}/stats", request.id))
            .query("stats", stats)
            .query_opt("season", request.season.map(Param::from))),
        None => Ok(Endpoint::new(&format!("api/v1/people/{}", request.id))),
    }
}

pub(crate) fn schedule(request: &ScheduleRequest) -> Result<Endpoint> {
    if request.date.is_some() && (request.start_date.is_some() || request.end_date.is_some()) {
        return Err(Error::invalid_combination(
            "schedule accepts either date or startDate/endDate, not both",
        ));
    }
    Ok(Endpoint::new("api/v1/schedule")
        .query_opt("teamId", request.team_id.clone())
        .query_opt("expand", request.expand.clone())
        .query_opt("date", request.date.map(Param::from))
        .query_opt("startDate", request.start_date.map(Param::from))
        .query_opt("endDate", request.end_date.map(Param::from)))
}

pub(crate) fn standings(request: &StandingsRequest) -> Result<Endpoint> {
    if request.season.is_some() && request.date.is_some() {
        return Err(Error::invalid_combination(
            "standings accepts either season or date, not both",
        ));
    }
    Ok(Endpoint::new("api/v1/standings/byLeague")
        .query_opt("expand", request.expand.clone())
        .query_opt("season", request.season.map(Param::from))
        .query_opt("date", request.date.map(Param::from)))
}

/// Builds an endpoint from a path template with `{}` placeholder segments,
/// the escape hatch for endpoints without a dedicated method.
///
/// Each placeholder must stand alone as a path segment and consumes one
/// positional argument; a count mismatch fails before any request is issued.
pub(crate) fn template(
    template: &str,
    args: &[Param],
    query: &[(&str, Param)],
) -> Result<Endpoint> {
    let mut remaining = args.iter();
    let mut segments = Vec::new();
    for piece in template.split('/').filter(|segment| !segment.is_empty()) {
        if piece == "{}" {
            let arg = remaining
                .next()
                .ok_or_else(|| Error::validation("not enough arguments for path template"))?;
            segments.push(arg.to_url_param());
        } else {
            segments.push(piece.to_owned());
        }
    }
    if remaining.next().is_some() {
        return Err(Error::validation("too many arguments for path template"));
    }

    let endpoint = Endpoint {
        segments,
        query: Vec::new(),
    };
    Ok(query
        .iter()
        .fold(endpoint, |endpoint, (key, value)| endpoint.query(key, value)))
}

#![cfg(feature = "blocking")]

use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use nhl_stats_client::error::{InvalidArgumentCombination, Kind, Status};
use nhl_stats_client::params::{GameId, Param, Season};
use nhl_stats_client::stats::BlockingClient;
use nhl_stats_client::stats::types::request::{ScheduleRequest, StandingsRequest, TeamsRequest};
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn teams_sends_identical_query_to_async_client() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = BlockingClient::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/teams")
            .query_param("teamId", "8")
            .query_param("expand", "foo,bar")
            .query_param("stats", "single");
        then.status(StatusCode::OK.as_u16())
            .json_body(json!({"teams": [{"id": 8}]}));
    });

    let request = TeamsRequest::builder()
        .id(8)
        .expand(vec!["foo", "bar"])
        .stats("single")
        .build();

    let doc = client.teams(&request)?;

    let teams = doc.props().field("teams")?.as_array().expect("array");
    assert_eq!(teams.index(0)?.field("id")?.as_i64(), Some(8));
    mock.assert();

    Ok(())
}

#[test]
fn boxscore_uses_canonical_game_code() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = BlockingClient::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/game/2017021000/boxscore");
        then.status(StatusCode::OK.as_u16())
            .json_body(json!({"teams": {}}));
    });

    client.boxscore(GameId::new(Season::from_end(2018), 1000))?;

    mock.assert();

    Ok(())
}

#[test]
fn validation_fails_before_io() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = BlockingClient::new(&server.base_url())?;

    let request = ScheduleRequest::builder()
        .date(NaiveDate::from_ymd_opt(2018, 3, 1).expect("valid date"))
        .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date"))
        .build();
    let error = client.schedule(&request).unwrap_err();
    assert!(error.downcast_ref::<InvalidArgumentCombination>().is_some());

    let request = StandingsRequest::builder()
        .season(Season::from_end(2018))
        .date(NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date"))
        .build();
    let error = client.standings(&request).unwrap_err();
    assert!(error.downcast_ref::<InvalidArgumentCombination>().is_some());

    Ok(())
}

#[test]
fn escape_hatch_and_status_errors() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = BlockingClient::new(&server.base_url())?;

    let ok = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/teams/8")
            .query_param("expand", "team.roster");
        then.status(StatusCode::OK.as_u16())
            .json_body(json!({"teams": []}));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/api/v1/divisions/999");
        then.status(StatusCode::NOT_FOUND.as_u16()).body("Not Found");
    });

    client.get(
        "/api/v1/teams/{}",
        &[Param::from(8)],
        &[("expand", Param::from("team.roster"))],
    )?;

    let error = client.divisions(Some(999)).unwrap_err();
    assert_eq!(error.kind(), Kind::Status);
    let status = error.downcast_ref::<Status>().expect("status source");
    assert_eq!(status.status_code, StatusCode::NOT_FOUND);

    ok.assert();
    missing.assert();

    Ok(())
}

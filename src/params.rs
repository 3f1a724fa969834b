//! Domain parameter types and the URL parameter normalization protocol.
//!
//! The NHL API identifies seasons, games, and years with fixed-width numeric
//! codes. Each domain type here carries its canonical text form via the
//! [`UrlParam`] trait; [`Param`] is the closed set of values the endpoint
//! catalogue accepts for path segments and query parameters, with a single
//! dispatch in its [`UrlParam`] implementation.
//!
//! # Example
//!
//! ```
//! use nhl_stats_client::params::{GameId, Param, Season, UrlParam as _};
//!
//! let season = Season::from_end(2018);
//! assert_eq!(season.to_url_param(), "20172018");
//!
//! let game = GameId::new(season, 1000);
//! assert_eq!(game.to_url_param(), "2017021000");
//!
//! let expand = Param::from(vec!["team.roster", "team.stats"]);
//! assert_eq!(expand.to_url_param(), "team.roster,team.stats");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::Error;

/// Canonical URL text form of a domain value.
///
/// The returned string is exactly what the API expects in a path segment or
/// query parameter, before percent-encoding.
pub trait UrlParam {
    fn to_url_param(&self) -> String;
}

/// An NHL season, the half-open year pair `[begin, begin + 1)`.
///
/// The 2017-2018 season can be written as `Season::from_begin(2017)` or
/// `Season::from_end(2018)`, whichever bound is at hand; the other is derived.
/// The canonical form concatenates both 4-digit years: `"20172018"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season {
    begin: i32,
}

impl Season {
    /// Creates a season from both bounds, validating `end == begin + 1`.
    pub fn new(begin: i32, end: i32) -> Result<Self> {
        if end != begin + 1 {
            return Err(Error::validation(format!(
                "season end year must be one more than begin year, got {begin}-{end}"
            )));
        }
        Ok(Self { begin })
    }

    #[must_use]
    pub fn from_begin(begin: i32) -> Self {
        Self { begin }
    }

    #[must_use]
    pub fn from_end(end: i32) -> Self {
        Self { begin: end - 1 }
    }

    #[must_use]
    pub fn begin(self) -> i32 {
        self.begin
    }

    #[must_use]
    pub fn end(self) -> i32 {
        self.begin + 1
    }
}

impl UrlParam for Season {
    fn to_url_param(&self) -> String {
        format!("{:04}{:04}", self.begin(), self.end())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.begin(), self.end())
    }
}

impl FromStr for Season {
    type Err = Error;

    /// Parses the 8-digit concatenated form, e.g. `"20172018"`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = ascii_digits(s, 8)
            .ok_or_else(|| Error::validation(format!("season code must be 8 digits, got {s:?}")))?;
        let begin = parse_digits(&digits[..4]);
        let end = parse_digits(&digits[4..]);
        Season::new(begin, end)
    }
}

/// Category of an NHL game. The canonical form is the 2-digit zero-padded
/// discriminant used inside game codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Preseason = 1,
    Regular = 2,
    Playoffs = 3,
    Allstars = 4,
}

impl GameKind {
    /// The numeric discriminant used on the wire.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl UrlParam for GameKind {
    fn to_url_param(&self) -> String {
        format!("{:02}", self.code())
    }
}

impl TryFrom<u8> for GameKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(GameKind::Preseason),
            2 => Ok(GameKind::Regular),
            3 => Ok(GameKind::Playoffs),
            4 => Ok(GameKind::Allstars),
            other => Err(Error::validation(format!("unknown game kind code {other}"))),
        }
    }
}

/// Identifies a single game: season, kind, and game number.
///
/// The canonical form is the 10-digit game code `SSSSKKNNNN` — 4-digit season
/// begin year, 2-digit kind, 4-digit game number — e.g. `"2017021000"` for
/// regular-season game 1000 of 2017-2018. [`FromStr`] parses the same code, so
/// game ids round-trip through their text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId {
    season: Season,
    number: u16,
    kind: GameKind,
}

impl GameId {
    /// Creates a regular-season game id.
    #[must_use]
    pub fn new(season: Season, number: u16) -> Self {
        Self::with_kind(season, number, GameKind::Regular)
    }

    #[must_use]
    pub fn with_kind(season: Season, number: u16, kind: GameKind) -> Self {
        Self {
            season,
            number,
            kind,
        }
    }

    #[must_use]
    pub fn season(self) -> Season {
        self.season
    }

    #[must_use]
    pub fn number(self) -> u16 {
        self.number
    }

    #[must_use]
    pub fn kind(self) -> GameKind {
        self.kind
    }
}

impl UrlParam for GameId {
    fn to_url_param(&self) -> String {
        format!(
            "{:04}{:02}{:04}",
            self.season.begin(),
            self.kind.code(),
            self.number
        )
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_param())
    }
}

impl FromStr for GameId {
    type Err = Error;

    /// Parses the 10-digit game code, e.g. `"2017021000"`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = ascii_digits(s, 10)
            .ok_or_else(|| Error::validation(format!("game code must be 10 digits, got {s:?}")))?;
        let season = Season::from_begin(parse_digits(&digits[..4]));
        let kind = GameKind::try_from(u8::try_from(parse_digits(&digits[4..6])).unwrap_or(u8::MAX))?;
        let number = u16::try_from(parse_digits(&digits[6..])).unwrap_or(u16::MAX);
        Ok(GameId::with_kind(season, number, kind))
    }
}

/// A 4-digit zero-padded year. A plain integer would drop leading zeroes,
/// which the API rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl UrlParam for Year {
    fn to_url_param(&self) -> String {
        format!("{:04}", self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Time on ice, stored as whole seconds.
///
/// The API reports these as `MM:SS` strings; addition sums the seconds, so
/// per-period values can be folded into game totals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeOnIce {
    seconds: u32,
}

impl TimeOnIce {
    #[must_use]
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for TimeOnIce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

impl FromStr for TimeOnIce {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::validation(format!("time on ice must be MM:SS, got {s:?}"));
        let (mins, secs) = s.split_once(':').ok_or_else(bad)?;
        let mins: u32 = mins.parse().map_err(|_| bad())?;
        let secs: u32 = secs.parse().map_err(|_| bad())?;
        Ok(TimeOnIce::from_seconds(mins * 60 + secs))
    }
}

impl Add for TimeOnIce {
    type Output = TimeOnIce;

    fn add(self, rhs: TimeOnIce) -> TimeOnIce {
        TimeOnIce::from_seconds(self.seconds + rhs.seconds)
    }
}

impl AddAssign for TimeOnIce {
    fn add_assign(&mut self, rhs: TimeOnIce) {
        self.seconds += rhs.seconds;
    }
}

impl Sum for TimeOnIce {
    fn sum<I: Iterator<Item = TimeOnIce>>(iter: I) -> TimeOnIce {
        iter.fold(TimeOnIce::default(), Add::add)
    }
}

/// The closed set of values accepted as URL parameters.
///
/// Normalization is one total dispatch over these variants:
///
/// - domain types use their own canonical form,
/// - dates become `YYYY-MM-DD`,
/// - lists normalize each element and join with commas (empty list -> `""`),
/// - integers become base-10 decimal text,
/// - text passes through unchanged.
///
/// [`From`] impls cover construction from every supported type; dynamic JSON
/// values go through the fallible [`TryFrom<&Value>`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    Season(Season),
    Game(GameId),
    Kind(GameKind),
    Year(Year),
    Date(NaiveDate),
    List(Vec<Param>),
    Int(i64),
    Text(String),
}

impl UrlParam for Param {
    fn to_url_param(&self) -> String {
        match self {
            Param::Season(season) => season.to_url_param(),
            Param::Game(game) => game.to_url_param(),
            Param::Kind(kind) => kind.to_url_param(),
            Param::Year(year) => year.to_url_param(),
            Param::Date(date) => date.format("%Y-%m-%d").to_string(),
            Param::List(items) => items
                .iter()
                .map(UrlParam::to_url_param)
                .collect::<Vec<_>>()
                .join(","),
            Param::Int(n) => n.to_string(),
            Param::Text(text) => text.clone(),
        }
    }
}

impl From<Season> for Param {
    fn from(season: Season) -> Self {
        Param::Season(season)
    }
}

impl From<GameId> for Param {
    fn from(game: GameId) -> Self {
        Param::Game(game)
    }
}

impl From<GameKind> for Param {
    fn from(kind: GameKind) -> Self {
        Param::Kind(kind)
    }
}

impl From<Year> for Param {
    fn from(year: Year) -> Self {
        Param::Year(year)
    }
}

impl From<NaiveDate> for Param {
    fn from(date: NaiveDate) -> Self {
        Param::Date(date)
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Int(n)
    }
}

impl From<i32> for Param {
    fn from(n: i32) -> Self {
        Param::Int(n.into())
    }
}

impl From<u32> for Param {
    fn from(n: u32) -> Self {
        Param::Int(n.into())
    }
}

impl From<&str> for Param {
    fn from(text: &str) -> Self {
        Param::Text(text.to_owned())
    }
}

impl From<String> for Param {
    fn from(text: String) -> Self {
        Param::Text(text)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(items: Vec<T>) -> Self {
        Param::List(items.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<&Value> for Param {
    type Error = Error;

    /// Converts a dynamic JSON value. Strings, integers, and arrays of those
    /// are supported; anything else fails with
    /// [`UnsupportedParameterType`](crate::error::UnsupportedParameterType).
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Param::Text(text.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(Param::Int)
                .ok_or_else(|| Error::unsupported_parameter("non-integer number")),
            Value::Array(items) => items
                .iter()
                .map(Param::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Param::List),
            Value::Bool(_) => Err(Error::unsupported_parameter("boolean")),
            Value::Null => Err(Error::unsupported_parameter("null")),
            Value::Object(_) => Err(Error::unsupported_parameter("object")),
        }
    }
}

/// Returns the bytes of `s` when it is exactly `len` ASCII digits.
fn ascii_digits(s: &str, len: usize) -> Option<&[u8]> {
    let bytes = s.as_bytes();
    (bytes.len() == len && bytes.iter().all(u8::is_ascii_digit)).then_some(bytes)
}

/// Folds ASCII digit bytes into an integer. Callers validate via
/// [`ascii_digits`] first.
fn parse_digits(digits: &[u8]) -> i32 {
    digits
        .iter()
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn season_from_begin_derives_end() {
        let season = Season::from_begin(2017);
        assert_eq!(season.begin(), 2017);
        assert_eq!(season.end(), 2018);
    }

    #[test]
    fn season_from_end_derives_begin() {
        let season = Season::from_end(2018);
        assert_eq!(season.begin(), 2017);
        assert_eq!(season.end(), 2018);
    }

    #[test]
    fn season_new_validates_span() {
        let season = Season::new(2017, 2018).expect("valid season");
        assert_eq!(season.to_url_param(), "20172018");

        Season::new(2017, 2019).unwrap_err();
        Season::new(2017, 2017).unwrap_err();
    }

    #[test]
    fn season_parses_and_round_trips() {
        let season: Season = "20172018".parse().expect("valid code");
        assert_eq!(season, Season::from_begin(2017));
        assert_eq!(season.to_url_param().parse::<Season>().expect("code"), season);

        "2017".parse::<Season>().unwrap_err();
        "20172019".parse::<Season>().unwrap_err();
        "2017201x".parse::<Season>().unwrap_err();
    }

    #[test]
    fn game_kind_codes_are_zero_padded() {
        assert_eq!(GameKind::Preseason.to_url_param(), "01");
        assert_eq!(GameKind::Regular.to_url_param(), "02");
        assert_eq!(GameKind::Playoffs.to_url_param(), "03");
        assert_eq!(GameKind::Allstars.to_url_param(), "04");
    }

    #[test]
    fn game_kind_from_code() {
        assert_eq!(GameKind::try_from(3).expect("valid code"), GameKind::Playoffs);
        GameKind::try_from(0).unwrap_err();
        GameKind::try_from(5).unwrap_err();
    }

    #[test]
    fn game_id_defaults_to_regular_season() {
        let game = GameId::new(Season::from_end(2018), 1000);
        assert_eq!(game.kind(), GameKind::Regular);
        assert_eq!(game.to_url_param(), "2017021000");
    }

    #[test]
    fn game_id_parses_and_round_trips() {
        let game: GameId = "2017021000".parse().expect("valid code");
        assert_eq!(game.season(), Season::from_begin(2017));
        assert_eq!(game.kind(), GameKind::Regular);
        assert_eq!(game.number(), 1000);

        let playoff = GameId::with_kind(Season::from_begin(2018), 111, GameKind::Playoffs);
        assert_eq!(
            playoff.to_url_param().parse::<GameId>().expect("code"),
            playoff
        );

        "20170210".parse::<GameId>().unwrap_err();
        "2017051000".parse::<GameId>().unwrap_err();
    }

    #[test]
    fn year_is_zero_padded() {
        assert_eq!(Year(26).to_url_param(), "0026");
        assert_eq!(Year(2018).to_url_param(), "2018");
    }

    #[test]
    fn time_on_ice_parses_and_formats() {
        let toi: TimeOnIce = "08:02".parse().expect("valid time");
        assert_eq!(toi.seconds(), 482);
        assert_eq!(toi.to_string(), "08:02");

        "8".parse::<TimeOnIce>().unwrap_err();
        "aa:02".parse::<TimeOnIce>().unwrap_err();
    }

    #[test]
    fn time_on_ice_adds_seconds() {
        let a: TimeOnIce = "01:30".parse().expect("valid time");
        let b: TimeOnIce = "02:45".parse().expect("valid time");
        assert_eq!((a + b).to_string(), "04:15");

        let total: TimeOnIce = [a, b, TimeOnIce::from_seconds(15)].into_iter().sum();
        assert_eq!(total.to_string(), "04:30");
    }

    #[test]
    fn normalize_list_joins_with_commas() {
        let param = Param::from(vec!["foo", "bar"]);
        assert_eq!(param.to_url_param(), "foo,bar");

        let empty = Param::List(Vec::new());
        assert_eq!(empty.to_url_param(), "");
    }

    #[test]
    fn normalize_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date");
        assert_eq!(Param::from(date).to_url_param(), "2018-01-01");
    }

    #[test]
    fn normalize_int_and_text() {
        assert_eq!(Param::from(8).to_url_param(), "8");
        assert_eq!(Param::from("single").to_url_param(), "single");
    }

    #[test]
    fn normalize_nested_list() {
        let param = Param::from(vec![
            Param::from(Season::from_begin(2017)),
            Param::from(19),
        ]);
        assert_eq!(param.to_url_param(), "20172018,19");
    }

    #[test]
    fn param_from_json_scalars() {
        let param = Param::try_from(&serde_json::json!(["foo", 8])).expect("supported values");
        assert_eq!(param.to_url_param(), "foo,8");
    }

    #[test]
    fn param_from_json_rejects_unsupported_types() {
        use crate::error::{Kind, UnsupportedParameterType};

        for value in [
            serde_json::json!(null),
            serde_json::json!(true),
            serde_json::json!(1.5),
            serde_json::json!({"a": 1}),
        ] {
            let error = Param::try_from(&value).unwrap_err();
            assert_eq!(error.kind(), Kind::UnsupportedParameter);
            assert!(error.downcast_ref::<UnsupportedParameterType>().is_some());
        }
    }
}

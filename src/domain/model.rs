use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Team identifier as it appears in the input documents.
///
/// Integer and string ids are distinct keys: `1` never matches `"1"`.
/// Integral floats such as `1.0` are the same key as `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TeamId {
    Number(i64),
    Text(String),
}

impl TeamId {
    /// Id for a JSON value, or `None` when no team could ever carry it.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(text) => Some(TeamId::Text(text.clone())),
            serde_json::Value::Number(number) => {
                if let Some(n) = number.as_i64() {
                    return Some(TeamId::Number(n));
                }
                let n = number.as_f64()?;
                let integral = n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64;
                integral.then_some(TeamId::Number(n as i64))
            }
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        TeamId::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid team id: {}", value)))
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::Number(n) => write!(f, "{}", n),
            TeamId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TeamId {
    fn from(value: i64) -> Self {
        TeamId::Number(value)
    }
}

impl From<i32> for TeamId {
    fn from(value: i32) -> Self {
        TeamId::Number(value.into())
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        TeamId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, deserialize_with = "lenient_team_id")]
    pub home_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "lenient_team_id")]
    pub away_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "finite_score")]
    pub home_score: Option<f64>,
    #[serde(default, deserialize_with = "finite_score")]
    pub away_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
}

impl Game {
    pub fn new(home: impl Into<TeamId>, away: impl Into<TeamId>) -> Self {
        Self {
            home_team_id: Some(home.into()),
            away_team_id: Some(away.into()),
            ..Self::default()
        }
    }

    pub fn with_score(mut self, home_score: f64, away_score: f64) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self
    }

    pub fn on(mut self, date: &str, time: &str) -> Self {
        self.date = date.to_string();
        self.time = Some(time.to_string());
        self
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Both scores present and finite.
    pub fn final_score(&self) -> Option<(f64, f64)> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) if home.is_finite() && away.is_finite() => Some((home, away)),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.final_score().is_some()
    }
}

/// 只接受數字型別的比分，其他值（字串、布林、null）一律視為尚未比賽
fn finite_score<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|score| score.is_finite()))
}

/// 無法對應任何隊伍的 id（布林、小數、物件）視為未知隊伍，比賽仍保留在賽程中
fn lenient_team_id<'de, D>(deserializer: D) -> std::result::Result<Option<TeamId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(TeamId::from_json(&value))
}

/// Scalars as display text: `900` becomes `"900"`. Null, arrays and objects are absent.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(match number.as_f64() {
            Some(n) if number.is_f64() => n.to_string(),
            _ => number.to_string(),
        }),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?))
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(serde_json::Value::deserialize(deserializer)?).unwrap_or_default())
}

/// The two input documents after extraction.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
}

impl TeamRecord {
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            wins: 0,
            losses: 0,
            points_for: 0.0,
            points_against: 0.0,
        }
    }

    pub fn differential(&self) -> f64 {
        self.points_for - self.points_against
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seed {
    pub seed: usize,
    #[serde(flatten)]
    pub record: TeamRecord,
    pub diff: f64,
}

/// A game placed on the schedule, with display names resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub game: Game,
    pub home_name: String,
    pub away_name: String,
    pub played: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDay {
    pub week: usize,
    pub date: String,
    /// Shown once per day when every located game shares the same site.
    pub site: Option<String>,
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRef {
    pub seed: usize,
    pub team_id: TeamId,
    pub name: String,
}

impl From<&Seed> for SeedRef {
    fn from(seed: &Seed) -> Self {
        Self {
            seed: seed.seed,
            team_id: seed.record.team_id.clone(),
            name: seed.record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BracketSlot {
    Seed(SeedRef),
    WinnerOf { game: String, seeds: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub label: String,
    pub first: BracketSlot,
    pub second: BracketSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub play_in: [Matchup; 2],
    pub semifinals: [Matchup; 2],
    pub championship: Matchup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum BracketProjection {
    NotReady { required: usize, available: usize },
    Ready(Bracket),
}

impl BracketProjection {
    pub fn is_ready(&self) -> bool {
        matches!(self, BracketProjection::Ready(_))
    }
}

/// Everything the presentation layer needs, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueReport {
    pub standings: Vec<TeamRecord>,
    pub seeds: Vec<Seed>,
    pub schedule: Vec<ScheduleDay>,
    pub bracket: BracketProjection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_deserialize_played_and_pending() {
        let games: Vec<Game> = serde_json::from_value(serde_json::json!([
            {"homeTeamId": 1, "awayTeamId": 2, "homeScore": 10, "awayScore": 7,
             "date": "2026-04-04", "time": "10:00 AM", "location": "Field 1"},
            {"homeTeamId": "a", "awayTeamId": "b", "date": "2026-04-11", "time": "9:00 AM"},
            {"homeTeamId": 1, "awayTeamId": 2, "homeScore": "10", "awayScore": 7, "date": "x"},
            {"homeTeamId": 1, "awayTeamId": 2, "homeScore": null, "awayScore": 7, "date": "x"}
        ]))
        .unwrap();

        assert_eq!(games[0].final_score(), Some((10.0, 7.0)));
        assert_eq!(games[0].location.as_deref(), Some("Field 1"));
        assert!(!games[1].is_played());
        assert_eq!(games[1].home_team_id, Some(TeamId::Text("a".to_string())));
        // 字串比分不算已完賽
        assert!(!games[2].is_played());
        assert!(!games[3].is_played());
    }

    #[test]
    fn test_integral_float_id_matches_integer() {
        let game: Game = serde_json::from_value(serde_json::json!(
            {"homeTeamId": 1.0, "awayTeamId": 2, "homeScore": 3, "awayScore": 1, "date": "d"}
        ))
        .unwrap();

        assert_eq!(game.home_team_id, Some(TeamId::Number(1)));
        assert_eq!(game.away_team_id, Some(TeamId::Number(2)));

        let team: Team = serde_json::from_value(serde_json::json!({"id": 3.0, "name": "C"})).unwrap();
        assert_eq!(team.id, TeamId::Number(3));
    }

    #[test]
    fn test_unresolvable_ids_keep_the_game() {
        let games: Vec<Game> = serde_json::from_value(serde_json::json!([
            {"homeTeamId": true, "awayTeamId": 2, "date": "d"},
            {"homeTeamId": 1.5, "awayTeamId": {"id": 2}, "homeScore": 3, "awayScore": 1, "date": "d"},
            {"homeTeamId": null, "awayTeamId": [1], "date": "d"}
        ]))
        .unwrap();

        assert_eq!(games.len(), 3);
        assert_eq!(games[0].home_team_id, None);
        assert_eq!(games[0].away_team_id, Some(TeamId::Number(2)));
        assert_eq!(games[1].home_team_id, None);
        assert_eq!(games[1].away_team_id, None);
        assert!(games[1].is_played());
        assert_eq!(games[2].home_team_id, None);
        assert_eq!(games[2].away_team_id, None);
    }

    #[test]
    fn test_team_with_unusable_id_is_rejected() {
        let team: std::result::Result<Team, _> =
            serde_json::from_value(serde_json::json!({"id": false, "name": "X"}));
        assert!(team.is_err());
    }

    #[test]
    fn test_scalar_time_and_date_become_text() {
        let game: Game = serde_json::from_value(serde_json::json!(
            {"homeTeamId": 1, "awayTeamId": 2, "date": 20260404, "time": 900, "location": 7.5}
        ))
        .unwrap();

        assert_eq!(game.date, "20260404");
        assert_eq!(game.time.as_deref(), Some("900"));
        assert_eq!(game.location.as_deref(), Some("7.5"));

        let game: Game = serde_json::from_value(serde_json::json!(
            {"homeTeamId": 1, "awayTeamId": 2, "date": null, "time": 10.0, "location": ["x"]}
        ))
        .unwrap();

        assert_eq!(game.date, "");
        assert_eq!(game.time.as_deref(), Some("10"));
        assert_eq!(game.location, None);
    }

    #[test]
    fn test_team_id_number_and_text_are_distinct() {
        assert_ne!(TeamId::from(1), TeamId::from("1"));
        assert_eq!(TeamId::from(7).to_string(), "7");
        assert_eq!(TeamId::from("owls").to_string(), "owls");
    }

    #[test]
    fn test_non_finite_scores_are_pending() {
        let game = Game::new(1, 2).with_score(f64::NAN, 3.0);
        assert!(!game.is_played());
        let game = Game::new(1, 2).with_score(f64::INFINITY, 3.0);
        assert!(!game.is_played());
    }

    #[test]
    fn test_seed_serializes_flat() {
        let record = TeamRecord::new(&Team::new(1, "A"));
        let seed = Seed {
            seed: 1,
            record,
            diff: 0.0,
        };
        let json = serde_json::to_value(&seed).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["name"], "A");
        assert_eq!(json["pointsFor"], 0.0);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::constants::{
    DEFAULT_LEAGUE_MEETINGS, DEFAULT_POINTS_DRAW, DEFAULT_POINTS_LOSS, DEFAULT_POINTS_WIN,
};
use super::errors::SportError;

/// Unique identifier for a sport. Assigned once at creation.
pub type SportId = Uuid;

/// Recorded score value. Scores are whole points; negative values are
/// rejected at the ledger boundary.
pub type Score = i64;

/// Identifier of a team, unique within one sport.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a match, unique within one sport.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a schedule time slot.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TimeSlotId(String);

impl TimeSlotId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TimeSlotId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A registered team. Renamed freely; never deleted while a match
/// references it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Explicit bracket seed. Teams without one are seeded by
    /// registration order after all seeded teams.
    pub seed: Option<u32>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One side of a match.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Entrant {
    /// A registered team.
    Team(TeamId),
    /// No opponent; the other side advances automatically. Only ever
    /// produced for round 1 of a bracket.
    Bye,
    /// Slot awaiting an upstream winner.
    Tbd,
}

impl Entrant {
    pub fn team(&self) -> Option<&TeamId> {
        match self {
            Self::Team(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }

    pub fn is_tbd(&self) -> bool {
        matches!(self, Self::Tbd)
    }
}

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

/// The two slots of a match, also naming the downstream slot a bracket
/// winner feeds into.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Home,
    Away,
}

/// A single fixture between two entrants.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// 1-based round number. For brackets the final carries the highest
    /// round; for round-robin play this is the fixture round.
    pub round: u32,
    pub home: Entrant,
    pub away: Entrant,
    pub score_home: Option<Score>,
    pub score_away: Option<Score>,
    pub status: MatchStatus,
    /// A completed-and-locked match rejects result re-entry.
    #[serde(default)]
    pub locked: bool,
    /// Authoritative winner side for a drawn knockout match.
    #[serde(default)]
    pub decided_by: Option<Side>,
    /// Bracket only: the downstream match this match's winner feeds.
    #[serde(default)]
    pub next_match_id: Option<MatchId>,
    /// Bracket only: which slot of the downstream match is filled.
    #[serde(default)]
    pub next_slot: Option<Side>,
    #[serde(default)]
    pub time_slot_id: Option<TimeSlotId>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl Match {
    pub fn new(id: MatchId, round: u32, home: Entrant, away: Entrant) -> Self {
        Self {
            id,
            round,
            home,
            away,
            score_home: None,
            score_away: None,
            status: MatchStatus::Scheduled,
            locked: false,
            decided_by: None,
            next_match_id: None,
            next_slot: None,
            time_slot_id: None,
            venue: None,
        }
    }

    pub fn entrant(&self, side: Side) -> &Entrant {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn entrant_mut(&mut self, side: Side) -> &mut Entrant {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        self.home.team() == Some(team) || self.away.team() == Some(team)
    }

    /// Winner of a completed match: the bye survivor, the higher score,
    /// or the decided-by side when the scores are level.
    pub fn winner(&self) -> Option<TeamId> {
        if self.status != MatchStatus::Completed {
            return None;
        }
        match (&self.home, &self.away) {
            (Entrant::Team(team), Entrant::Bye) | (Entrant::Bye, Entrant::Team(team)) => {
                Some(team.clone())
            }
            (Entrant::Team(home), Entrant::Team(away)) => {
                let score_home = self.score_home?;
                let score_away = self.score_away?;
                if score_home > score_away {
                    Some(home.clone())
                } else if score_away > score_home {
                    Some(away.clone())
                } else {
                    self.decided_by.map(|side| match side {
                        Side::Home => home.clone(),
                        Side::Away => away.clone(),
                    })
                }
            }
            _ => None,
        }
    }
}

/// Competition format of a sport. Immutable after creation: changing it
/// would invalidate the match graph.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SportType {
    Tournament,
    RoundRobin,
    Ranking,
    League,
}

/// Points awarded per result, used by the round-robin and league tables.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PointsTable {
    pub win: Score,
    pub draw: Score,
    pub loss: Score,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            win: DEFAULT_POINTS_WIN,
            draw: DEFAULT_POINTS_DRAW,
            loss: DEFAULT_POINTS_LOSS,
        }
    }
}

/// One scheduling unit matches can be assigned to.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub label: String,
}

impl TimeSlot {
    pub fn new(id: impl Into<TimeSlotId>, label: &str) -> Self {
        Self {
            id: id.into(),
            label: label.to_string(),
        }
    }
}

/// Ordered time slots for the competition day.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSettings {
    pub time_slots: Vec<TimeSlot>,
}

/// How a ranking sport folds a team's performances into one score.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationRule {
    /// Total of all recorded performances.
    #[default]
    Sum,
    /// Best single recorded performance.
    BestOf,
}

/// A single recorded performance for a ranking sport.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub team_id: TeamId,
    pub score: Score,
    pub recorded_at: DateTime<Utc>,
}

/// The composite aggregate the calculators and the validator operate
/// over. Owned and persisted whole by the external store.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub id: SportId,
    pub name: String,
    #[serde(rename = "type")]
    pub sport_type: SportType,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    #[serde(default)]
    pub schedule_settings: ScheduleSettings,
    #[serde(default)]
    pub points_table: PointsTable,
    /// League only: meetings per pair of teams.
    #[serde(default = "default_meetings")]
    pub meetings: u32,
    /// Ranking only: performance aggregation rule.
    #[serde(default)]
    pub aggregation: AggregationRule,
    /// Ranking only: recorded performances.
    #[serde(default)]
    pub performances: Vec<Performance>,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

fn default_meetings() -> u32 {
    DEFAULT_LEAGUE_MEETINGS
}

impl Sport {
    pub fn new(name: &str, sport_type: SportType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sport_type,
            teams: Vec::new(),
            matches: Vec::new(),
            schedule_settings: ScheduleSettings::default(),
            points_table: PointsTable::default(),
            meetings: DEFAULT_LEAGUE_MEETINGS,
            aggregation: AggregationRule::default(),
            performances: Vec::new(),
            rules: None,
            description: None,
            cover_image_url: None,
        }
    }

    pub fn with_points_table(mut self, points_table: PointsTable) -> Self {
        self.points_table = points_table;
        self
    }

    pub fn with_meetings(mut self, meetings: u32) -> Self {
        self.meetings = meetings;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationRule) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_rules(mut self, rules: &str) -> Self {
        self.rules = Some(rules.to_string());
        self
    }

    /// Hierarchical store key for this sport.
    pub fn path(&self) -> String {
        format!("/sports/{}", self.id)
    }

    /// Team lists freeze once the match structure exists.
    pub fn structure_finalized(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| &team.id == id)
    }

    /// Position of a team in the original registration order. The final
    /// tie-break stage falls back to this.
    pub fn registration_index(&self, id: &TeamId) -> Option<usize> {
        self.teams.iter().position(|team| &team.id == id)
    }

    pub fn match_by_id(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == id)
    }

    pub(crate) fn match_index(&self, id: &MatchId) -> Option<usize> {
        self.matches.iter().position(|m| &m.id == id)
    }

    pub fn time_slot(&self, id: &TimeSlotId) -> Option<&TimeSlot> {
        self.schedule_settings
            .time_slots
            .iter()
            .find(|slot| &slot.id == id)
    }

    pub fn add_team(&mut self, team: Team) -> Result<(), SportError> {
        if self.structure_finalized() {
            return Err(SportError::StructureFinalized(self.sport_type));
        }
        if self.team(&team.id).is_some() {
            return Err(SportError::DuplicateTeam(team.id));
        }
        self.teams.push(team);
        Ok(())
    }

    pub fn rename_team(&mut self, id: &TeamId, name: &str) -> Result<(), SportError> {
        let team = self
            .teams
            .iter_mut()
            .find(|team| &team.id == id)
            .ok_or_else(|| SportError::UnknownTeam(id.clone()))?;
        team.name = name.to_string();
        Ok(())
    }

    /// Remove a team that nothing references. A team referenced by a
    /// match or a recorded performance can only be renamed.
    pub fn remove_team(&mut self, id: &TeamId) -> Result<(), SportError> {
        if self.team(id).is_none() {
            return Err(SportError::UnknownTeam(id.clone()));
        }
        let referenced = self.matches.iter().any(|m| m.involves(id))
            || self.performances.iter().any(|p| &p.team_id == id);
        if referenced {
            return Err(SportError::TeamReferenced(id.clone()));
        }
        self.teams.retain(|team| &team.id != id);
        Ok(())
    }
}

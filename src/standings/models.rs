//! Derived standings views. Never persisted: recomputed from the match
//! ledger on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sport::{Entrant, MatchId, MatchStatus, Score, SportType, TeamId};

/// A calculator was invoked against the wrong sport type.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CalcError {
    #[error("calculator expects a {expected:?} sport, got {actual:?}")]
    FormatMismatch {
        expected: SportType,
        actual: SportType,
    },
}

pub type CalcResult<T> = Result<T, CalcError>;

/// One row of a round-robin or league table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub team_id: TeamId,
    /// Joint placement: tied teams share a rank and the next rank skips
    /// the tied count.
    pub rank: usize,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub scored: Score,
    pub conceded: Score,
    pub difference: Score,
    pub points: Score,
}

/// One row of a ranking list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub team_id: TeamId,
    pub rank: usize,
    /// Aggregated score per the sport's aggregation rule.
    pub score: Score,
    pub entries: u32,
    /// When the aggregate was achieved; earlier breaks ties.
    pub achieved_at: Option<DateTime<Utc>>,
}

/// One match as presented inside a bracket round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketNode {
    pub match_id: MatchId,
    pub round: u32,
    pub home: Entrant,
    pub away: Entrant,
    pub score_home: Option<Score>,
    pub score_away: Option<Score>,
    pub status: MatchStatus,
    pub winner: Option<TeamId>,
}

/// The whole knockout tree, round by round, plus the champion once the
/// final is complete.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketView {
    pub rounds: Vec<Vec<BracketNode>>,
    pub champion: Option<TeamId>,
}

/// Output of a format calculator.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Standings {
    Bracket(BracketView),
    Table(Vec<StandingsRow>),
    Ranking(Vec<RankingRow>),
}

impl Standings {
    pub fn as_bracket(&self) -> Option<&BracketView> {
        match self {
            Self::Bracket(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[StandingsRow]> {
        match self {
            Self::Table(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_ranking(&self) -> Option<&[RankingRow]> {
        match self {
            Self::Ranking(rows) => Some(rows),
            _ => None,
        }
    }
}

//! Mutation error taxonomy. Every error is local and recoverable: the
//! organizer UI is expected to re-prompt, nothing here is fatal.

use thiserror::Error;

use super::entities::{MatchId, Score, SportType, TeamId, TimeSlotId};

/// Errors from the result-recording entry points.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LedgerError {
    #[error("no match with id {0}")]
    UnknownMatch(MatchId),

    #[error("no registered team on that side of the match")]
    UnknownTeam,

    #[error("score {0} is not a valid result")]
    InvalidScore(Score),

    #[error("match {0} is a bye; the free side advances automatically")]
    ByeMatch(MatchId),

    #[error("match {0} is drawn; knockout results need a decided-by side")]
    DrawNotAllowed(MatchId),

    #[error("match {0} is locked; unlock it before re-entering a result")]
    MatchLocked(MatchId),

    #[error("operation requires a {expected:?} sport, got {actual:?}")]
    FormatMismatch {
        expected: SportType,
        actual: SportType,
    },
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors from aggregate and structure operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SportError {
    #[error("no match with id {0}")]
    UnknownMatch(MatchId),

    #[error("no team with id {0}")]
    UnknownTeam(TeamId),

    #[error("no time slot with id {0}")]
    UnknownTimeSlot(TimeSlotId),

    #[error("team {0} is already registered")]
    DuplicateTeam(TeamId),

    #[error("team {0} is referenced by matches or results and can only be renamed")]
    TeamReferenced(TeamId),

    #[error("the {0:?} structure is finalized; teams can no longer change")]
    StructureFinalized(SportType),

    #[error("need at least {needed} teams, have {current}")]
    NotEnoughTeams { needed: usize, current: usize },

    #[error("operation requires a {expected:?} sport, got {actual:?}")]
    FormatMismatch {
        expected: SportType,
        actual: SportType,
    },
}

pub type SportResult<T> = Result<T, SportError>;

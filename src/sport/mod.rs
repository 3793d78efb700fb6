//! The Sport aggregate and its mutation surface.
//!
//! A [`Sport`] owns its teams, matches and schedule settings and is
//! read and written whole by the external store. This module provides:
//! - the persisted data model ([`entities`])
//! - the match ledger: result recording, locking, schedule edits
//!   ([`ledger`])
//! - structure generation: seeded brackets and round-robin fixtures
//!   ([`structure`])

pub mod constants;
pub mod entities;
pub mod errors;

mod ledger;
mod structure;

pub use entities::{
    AggregationRule, Entrant, Match, MatchId, MatchStatus, Performance, PointsTable,
    ScheduleSettings, Score, Side, Sport, SportId, SportType, Team, TeamId, TimeSlot, TimeSlotId,
};
pub use errors::{LedgerError, LedgerResult, SportError, SportResult};

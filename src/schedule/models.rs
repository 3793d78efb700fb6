//! Conflict report data. Conflicts are advisory: they are returned to
//! the organizer, never raised as errors, and never block a match.

use serde::{Deserialize, Serialize};

use crate::sport::{MatchId, TeamId, TimeSlotId};

/// A detected scheduling conflict.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Conflict {
    /// One team sits in two or more matches of the same time slot.
    DoubleBooked {
        team: TeamId,
        slot: TimeSlotId,
        matches: Vec<MatchId>,
    },
    /// Two or more matches share a time slot and a venue.
    VenueOverlap {
        venue: String,
        slot: TimeSlotId,
        matches: Vec<MatchId>,
    },
}

/// Outcome of a schedule validation pass.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub conflicts: Vec<Conflict>,
    /// Matches without a slot. Informational, not a conflict.
    pub unscheduled: Vec<MatchId>,
}

impl ScheduleReport {
    /// True when no conflict was found; unscheduled matches do not
    /// count against a clean schedule.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

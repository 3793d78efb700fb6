//! Read-only schedule validation over one sport snapshot.

use std::collections::BTreeMap;

use crate::sport::{MatchId, Side, Sport, TeamId, TimeSlotId};

use super::models::{Conflict, ScheduleReport};

/// Check every match's slot/venue assignment and report conflicts.
///
/// One pass over the matches builds slot buckets, so the cost stays
/// proportional to matches times teams-per-match even with many slots.
/// Buckets are ordered maps to keep the report deterministic.
pub fn validate(sport: &Sport) -> ScheduleReport {
    let mut team_slots: BTreeMap<(TeamId, TimeSlotId), Vec<MatchId>> = BTreeMap::new();
    let mut venue_slots: BTreeMap<(String, TimeSlotId), Vec<MatchId>> = BTreeMap::new();
    let mut unscheduled = Vec::new();

    for m in &sport.matches {
        let Some(slot) = &m.time_slot_id else {
            unscheduled.push(m.id.clone());
            continue;
        };
        for side in [Side::Home, Side::Away] {
            if let Some(team) = m.entrant(side).team() {
                team_slots
                    .entry((team.clone(), slot.clone()))
                    .or_default()
                    .push(m.id.clone());
            }
        }
        if let Some(venue) = &m.venue {
            venue_slots
                .entry((venue.clone(), slot.clone()))
                .or_default()
                .push(m.id.clone());
        }
    }

    let mut conflicts = Vec::new();
    for ((team, slot), matches) in team_slots {
        if matches.len() >= 2 {
            conflicts.push(Conflict::DoubleBooked {
                team,
                slot,
                matches,
            });
        }
    }
    for ((venue, slot), matches) in venue_slots {
        if matches.len() >= 2 {
            conflicts.push(Conflict::VenueOverlap {
                venue,
                slot,
                matches,
            });
        }
    }

    ScheduleReport {
        conflicts,
        unscheduled,
    }
}

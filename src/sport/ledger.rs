//! Result recording and schedule edits: the only mutation entry points
//! of the engine. Everything else derives from the post-mutation
//! snapshot.

use chrono::Utc;
use log::{debug, info};

use super::entities::{
    Entrant, MatchId, MatchStatus, Performance, Score, Side, Sport, SportType, TeamId, TimeSlotId,
};
use super::errors::{LedgerError, LedgerResult, SportError, SportResult};

impl Sport {
    /// Record a result. For Tournament sports a drawn score is rejected;
    /// use [`Sport::record_decided`] when the format settles draws on a
    /// tiebreak field.
    pub fn record_result(
        &mut self,
        match_id: &MatchId,
        score_home: Score,
        score_away: Score,
    ) -> LedgerResult<()> {
        self.record_inner(match_id, score_home, score_away, None)
    }

    /// Record a result together with the side that won on a tiebreak.
    /// The decided-by side is stored on the match and is authoritative
    /// when the scores are level.
    pub fn record_decided(
        &mut self,
        match_id: &MatchId,
        score_home: Score,
        score_away: Score,
        winner: Side,
    ) -> LedgerResult<()> {
        self.record_inner(match_id, score_home, score_away, Some(winner))
    }

    fn record_inner(
        &mut self,
        match_id: &MatchId,
        score_home: Score,
        score_away: Score,
        decided_by: Option<Side>,
    ) -> LedgerResult<()> {
        if score_home < 0 {
            return Err(LedgerError::InvalidScore(score_home));
        }
        if score_away < 0 {
            return Err(LedgerError::InvalidScore(score_away));
        }

        let idx = self
            .match_index(match_id)
            .ok_or_else(|| LedgerError::UnknownMatch(match_id.clone()))?;
        let m = &self.matches[idx];
        if m.home.is_bye() || m.away.is_bye() {
            return Err(LedgerError::ByeMatch(match_id.clone()));
        }
        if m.home.team().is_none() || m.away.team().is_none() {
            return Err(LedgerError::UnknownTeam);
        }
        if m.status == MatchStatus::Completed && m.locked {
            return Err(LedgerError::MatchLocked(match_id.clone()));
        }
        let knockout = self.sport_type == SportType::Tournament;
        if knockout && score_home == score_away && decided_by.is_none() {
            return Err(LedgerError::DrawNotAllowed(match_id.clone()));
        }

        let m = &mut self.matches[idx];
        m.score_home = Some(score_home);
        m.score_away = Some(score_away);
        m.decided_by = if knockout && score_home == score_away {
            decided_by
        } else {
            None
        };
        m.status = MatchStatus::Completed;
        info!("recorded {match_id}: {score_home}-{score_away}");

        if knockout {
            self.propagate(idx);
        }
        Ok(())
    }

    /// Freeze a recorded result against re-entry.
    pub fn lock_result(&mut self, match_id: &MatchId) -> LedgerResult<()> {
        self.set_locked(match_id, true)
    }

    /// Reopen a locked result for correction.
    pub fn unlock_result(&mut self, match_id: &MatchId) -> LedgerResult<()> {
        self.set_locked(match_id, false)
    }

    fn set_locked(&mut self, match_id: &MatchId, locked: bool) -> LedgerResult<()> {
        let idx = self
            .match_index(match_id)
            .ok_or_else(|| LedgerError::UnknownMatch(match_id.clone()))?;
        self.matches[idx].locked = locked;
        Ok(())
    }

    /// Record a performance for a Ranking sport.
    pub fn record_performance(&mut self, team_id: &TeamId, score: Score) -> LedgerResult<()> {
        if self.sport_type != SportType::Ranking {
            return Err(LedgerError::FormatMismatch {
                expected: SportType::Ranking,
                actual: self.sport_type,
            });
        }
        if score < 0 {
            return Err(LedgerError::InvalidScore(score));
        }
        if self.team(team_id).is_none() {
            return Err(LedgerError::UnknownTeam);
        }
        self.performances.push(Performance {
            team_id: team_id.clone(),
            score,
            recorded_at: Utc::now(),
        });
        info!("recorded performance for {team_id}: {score}");
        Ok(())
    }

    /// Assign a match to a time slot, optionally at a venue. Advisory
    /// conflict detection lives in [`crate::schedule`]; assignment never
    /// blocks.
    pub fn assign_time_slot(
        &mut self,
        match_id: &MatchId,
        slot_id: &TimeSlotId,
        venue: Option<&str>,
    ) -> SportResult<()> {
        if self.time_slot(slot_id).is_none() {
            return Err(SportError::UnknownTimeSlot(slot_id.clone()));
        }
        let idx = self
            .match_index(match_id)
            .ok_or_else(|| SportError::UnknownMatch(match_id.clone()))?;
        let m = &mut self.matches[idx];
        m.time_slot_id = Some(slot_id.clone());
        m.venue = venue.map(str::to_string);
        Ok(())
    }

    pub fn clear_time_slot(&mut self, match_id: &MatchId) -> SportResult<()> {
        let idx = self
            .match_index(match_id)
            .ok_or_else(|| SportError::UnknownMatch(match_id.clone()))?;
        let m = &mut self.matches[idx];
        m.time_slot_id = None;
        m.venue = None;
        Ok(())
    }

    /// Seat the winner of a completed bracket match in its downstream
    /// slot. A correction (the slot already held a different team)
    /// resets everything downstream first, so no stale result survives.
    pub(crate) fn propagate(&mut self, idx: usize) {
        let Some(winner) = self.matches[idx].winner() else {
            return;
        };
        let Some((next_idx, slot)) = self.next_of(idx) else {
            info!("final complete; champion is {winner}");
            return;
        };

        let seated = self.matches[next_idx].entrant(slot).team().cloned();
        match seated {
            Some(seated) if seated == winner => {
                // Same winner re-recorded; downstream stays untouched.
                debug!("{winner} already seated in {}", self.matches[next_idx].id);
            }
            Some(seated) => {
                info!(
                    "correction: {} replaces {seated} in {}; resetting downstream",
                    winner, self.matches[next_idx].id
                );
                self.reset_downstream(next_idx);
                *self.matches[next_idx].entrant_mut(slot) = Entrant::Team(winner);
            }
            None => {
                debug!("{winner} advances to {}", self.matches[next_idx].id);
                *self.matches[next_idx].entrant_mut(slot) = Entrant::Team(winner);
            }
        }
    }

    /// Downstream match and slot fed by the match at `idx`, resolved
    /// positionally.
    fn next_of(&self, idx: usize) -> Option<(usize, Side)> {
        let m = &self.matches[idx];
        let next_id = m.next_match_id.as_ref()?;
        let slot = m.next_slot?;
        let next_idx = self.match_index(next_id)?;
        Some((next_idx, slot))
    }

    /// Reset the chain from `start` to the final: scores, decided-by
    /// flags and locks cleared, status back to Scheduled, and every slot
    /// the chain had fed emptied again.
    fn reset_downstream(&mut self, start: usize) {
        let mut idx = start;
        loop {
            let next = self.next_of(idx);
            let m = &mut self.matches[idx];
            m.score_home = None;
            m.score_away = None;
            m.decided_by = None;
            m.locked = false;
            m.status = MatchStatus::Scheduled;
            match next {
                Some((next_idx, slot)) => {
                    *self.matches[next_idx].entrant_mut(slot) = Entrant::Tbd;
                    idx = next_idx;
                }
                None => break,
            }
        }
    }
}

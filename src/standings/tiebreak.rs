//! Tie-break policy shared by the round-robin and league tables.
//!
//! Stages, in priority order: points, head-to-head between an exactly
//! tied pair, score differential, scores-for, and finally the original
//! registration order. The last stage only settles display order;
//! teams still level after the first four stages share a rank and the
//! next rank skips the tied count.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::sport::{MatchStatus, PointsTable, Score, Sport, TeamId};

use super::models::StandingsRow;

/// Per-team aggregate folded from the completed matches.
#[derive(Clone, Debug)]
pub(crate) struct TeamRecord {
    pub team_id: TeamId,
    pub registration: usize,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub scored: Score,
    pub conceded: Score,
    pub points: Score,
}

impl TeamRecord {
    fn new(team_id: TeamId, registration: usize) -> Self {
        Self {
            team_id,
            registration,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            scored: 0,
            conceded: 0,
            points: 0,
        }
    }

    pub fn difference(&self) -> Score {
        self.scored - self.conceded
    }

    fn into_row(self, rank: usize) -> StandingsRow {
        StandingsRow {
            rank,
            difference: self.difference(),
            team_id: self.team_id,
            played: self.played,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            scored: self.scored,
            conceded: self.conceded,
            points: self.points,
        }
    }
}

/// Fold every completed match into per-team aggregates, one record per
/// registered team. Unplayed matches contribute nothing.
pub(crate) fn fold_records(sport: &Sport) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = sport
        .teams
        .iter()
        .enumerate()
        .map(|(registration, team)| TeamRecord::new(team.id.clone(), registration))
        .collect();
    let index: HashMap<&TeamId, usize> = sport
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| (&team.id, i))
        .collect();

    let table = &sport.points_table;
    for m in &sport.matches {
        if m.status != MatchStatus::Completed {
            continue;
        }
        let (Some(home), Some(away)) = (m.home.team(), m.away.team()) else {
            continue;
        };
        let (Some(score_home), Some(score_away)) = (m.score_home, m.score_away) else {
            continue;
        };
        let (Some(&home_idx), Some(&away_idx)) = (index.get(home), index.get(away)) else {
            continue;
        };

        credit(&mut records[home_idx], score_home, score_away, table);
        credit(&mut records[away_idx], score_away, score_home, table);
    }
    records
}

fn credit(record: &mut TeamRecord, scored: Score, conceded: Score, table: &PointsTable) {
    record.played += 1;
    record.scored += scored;
    record.conceded += conceded;
    if scored > conceded {
        record.wins += 1;
        record.points += table.win;
    } else if scored < conceded {
        record.losses += 1;
        record.points += table.loss;
    } else {
        record.draws += 1;
        record.points += table.draw;
    }
}

/// Mutual results per team pair, keyed by the lexically smaller id
/// first. Used by the head-to-head stage.
pub(crate) struct HeadToHead {
    mutual: HashMap<(TeamId, TeamId), Mutual>,
}

#[derive(Default)]
struct Mutual {
    points_first: Score,
    points_second: Score,
    diff_first: Score,
}

impl HeadToHead {
    pub(crate) fn build(sport: &Sport) -> Self {
        let table = &sport.points_table;
        let mut mutual: HashMap<(TeamId, TeamId), Mutual> = HashMap::new();
        for m in &sport.matches {
            if m.status != MatchStatus::Completed {
                continue;
            }
            let (Some(home), Some(away)) = (m.home.team(), m.away.team()) else {
                continue;
            };
            let (Some(score_home), Some(score_away)) = (m.score_home, m.score_away) else {
                continue;
            };

            let home_points = result_points(score_home, score_away, table);
            let away_points = result_points(score_away, score_home, table);
            let home_is_first = home <= away;
            let key = if home_is_first {
                (home.clone(), away.clone())
            } else {
                (away.clone(), home.clone())
            };
            let entry = mutual.entry(key).or_default();
            if home_is_first {
                entry.points_first += home_points;
                entry.points_second += away_points;
                entry.diff_first += score_home - score_away;
            } else {
                entry.points_first += away_points;
                entry.points_second += home_points;
                entry.diff_first += score_away - score_home;
            }
        }
        Self { mutual }
    }

    /// Order `a` against `b` by their mutual results: points earned in
    /// the matches between the two, then score difference there.
    fn compare(&self, a: &TeamId, b: &TeamId) -> Ordering {
        let a_is_first = a <= b;
        let key = if a_is_first {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        let Some(m) = self.mutual.get(&key) else {
            return Ordering::Equal;
        };
        let (a_points, b_points, a_diff) = if a_is_first {
            (m.points_first, m.points_second, m.diff_first)
        } else {
            (m.points_second, m.points_first, -m.diff_first)
        };
        let b_diff = -a_diff;
        b_points.cmp(&a_points).then_with(|| b_diff.cmp(&a_diff))
    }
}

fn result_points(scored: Score, conceded: Score, table: &PointsTable) -> Score {
    match scored.cmp(&conceded) {
        Ordering::Greater => table.win,
        Ordering::Less => table.loss,
        Ordering::Equal => table.draw,
    }
}

/// Stages 1-4: points, head-to-head for an exactly tied pair,
/// differential, scores-for. `Equal` here means the teams share a rank.
fn compare_ranked(
    a: &TeamRecord,
    b: &TeamRecord,
    points_tied: &HashMap<Score, usize>,
    head_to_head: &HeadToHead,
) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| {
            if points_tied.get(&a.points) == Some(&2) {
                head_to_head.compare(&a.team_id, &b.team_id)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.difference().cmp(&a.difference()))
        .then_with(|| b.scored.cmp(&a.scored))
}

/// Sort records by the full tie-break chain and assign joint-placement
/// ranks.
pub(crate) fn rank(sport: &Sport, mut records: Vec<TeamRecord>) -> Vec<StandingsRow> {
    let mut points_tied: HashMap<Score, usize> = HashMap::new();
    for record in &records {
        *points_tied.entry(record.points).or_insert(0) += 1;
    }
    let head_to_head = HeadToHead::build(sport);

    records.sort_by(|a, b| {
        compare_ranked(a, b, &points_tied, &head_to_head)
            .then_with(|| a.registration.cmp(&b.registration))
    });

    let mut rows: Vec<StandingsRow> = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let rank = match position {
            0 => 1,
            _ if compare_ranked(&records[position - 1], record, &points_tied, &head_to_head)
                == Ordering::Equal =>
            {
                rows[position - 1].rank
            }
            _ => position + 1,
        };
        rows.push(record.clone().into_row(rank));
    }
    rows
}

//! Ranking list for sports scored by aggregate or placement metrics
//! rather than head-to-head play.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::sport::{AggregationRule, Score, Sport, SportType, TeamId};

use super::models::{CalcError, CalcResult, RankingRow, Standings};
use super::Calculate;

#[derive(Clone, Copy, Debug, Default)]
pub struct RankingCalculator;

impl Calculate for RankingCalculator {
    fn sport_type(&self) -> SportType {
        SportType::Ranking
    }

    fn compute(&self, sport: &Sport) -> CalcResult<Standings> {
        if sport.sport_type != SportType::Ranking {
            return Err(CalcError::FormatMismatch {
                expected: SportType::Ranking,
                actual: sport.sport_type,
            });
        }

        let mut aggregates: Vec<Aggregate> = sport
            .teams
            .iter()
            .enumerate()
            .map(|(registration, team)| aggregate_for(sport, &team.id, registration))
            .collect();

        aggregates.sort_by(|a, b| {
            compare_scored(a, b).then_with(|| a.registration.cmp(&b.registration))
        });

        let mut rows: Vec<RankingRow> = Vec::with_capacity(aggregates.len());
        for (position, agg) in aggregates.iter().enumerate() {
            let rank = match position {
                0 => 1,
                _ if compare_scored(&aggregates[position - 1], agg) == Ordering::Equal => {
                    rows[position - 1].rank
                }
                _ => position + 1,
            };
            rows.push(RankingRow {
                team_id: agg.team_id.clone(),
                rank,
                score: agg.score,
                entries: agg.entries,
                achieved_at: agg.achieved_at,
            });
        }
        Ok(Standings::Ranking(rows))
    }
}

struct Aggregate {
    team_id: TeamId,
    registration: usize,
    score: Score,
    entries: u32,
    achieved_at: Option<DateTime<Utc>>,
}

/// Fold one team's performances per the sport's aggregation rule.
/// `Sum` is achieved when the last contributing performance lands;
/// `BestOf` when the best one was first recorded.
fn aggregate_for(sport: &Sport, team_id: &TeamId, registration: usize) -> Aggregate {
    let mut score: Score = 0;
    let mut entries: u32 = 0;
    let mut achieved_at: Option<DateTime<Utc>> = None;

    for perf in sport.performances.iter().filter(|p| &p.team_id == team_id) {
        entries += 1;
        match sport.aggregation {
            AggregationRule::Sum => {
                score += perf.score;
                achieved_at = Some(match achieved_at {
                    Some(at) => at.max(perf.recorded_at),
                    None => perf.recorded_at,
                });
            }
            AggregationRule::BestOf => {
                if entries == 1 || perf.score > score {
                    score = perf.score;
                    achieved_at = Some(perf.recorded_at);
                }
            }
        }
    }

    Aggregate {
        team_id: team_id.clone(),
        registration,
        score,
        entries,
        achieved_at,
    }
}

/// Score descending, then earliest achievement; teams that never
/// scored sort last. `Equal` means a shared rank.
fn compare_scored(a: &Aggregate, b: &Aggregate) -> Ordering {
    b.score.cmp(&a.score).then_with(|| match (a.achieved_at, b.achieved_at) {
        (Some(first), Some(second)) => first.cmp(&second),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

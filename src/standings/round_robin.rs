//! Round-robin table: every completed match folded into per-team
//! aggregates, ordered by the tie-break policy.

use crate::sport::{Sport, SportType};

use super::models::{CalcError, CalcResult, Standings};
use super::{tiebreak, Calculate};

#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobinCalculator;

impl Calculate for RoundRobinCalculator {
    fn sport_type(&self) -> SportType {
        SportType::RoundRobin
    }

    fn compute(&self, sport: &Sport) -> CalcResult<Standings> {
        if sport.sport_type != SportType::RoundRobin {
            return Err(CalcError::FormatMismatch {
                expected: SportType::RoundRobin,
                actual: sport.sport_type,
            });
        }
        let records = tiebreak::fold_records(sport);
        Ok(Standings::Table(tiebreak::rank(sport, records)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::{PointsTable, Team, TeamId};

    #[test]
    fn test_partially_played_season_is_a_snapshot() {
        let mut sport = Sport::new("test", SportType::RoundRobin);
        for id in ["a", "b", "c", "d"] {
            sport.add_team(Team::new(id, id)).unwrap();
        }
        sport.generate_structure().unwrap();

        // Only one of six fixtures played.
        let (first, rest): (Vec<_>, Vec<_>) = sport
            .matches
            .iter()
            .map(|m| m.id.clone())
            .partition(|id| id == &sport.matches[0].id);
        sport.record_result(&first[0], 1, 0).unwrap();

        let standings = RoundRobinCalculator.compute(&sport).unwrap();
        let rows = standings.as_table().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.iter().map(|r| u64::from(r.played)).sum::<u64>(), 2);
        assert_eq!(rest.len(), 5);
    }

    #[test]
    fn test_custom_points_table() {
        let mut sport = Sport::new("test", SportType::RoundRobin)
            .with_points_table(PointsTable {
                win: 2,
                draw: 1,
                loss: 0,
            });
        for id in ["a", "b"] {
            sport.add_team(Team::new(id, id)).unwrap();
        }
        sport.generate_structure().unwrap();
        let id = sport.matches[0].id.clone();
        sport.record_result(&id, 3, 1).unwrap();

        let standings = RoundRobinCalculator.compute(&sport).unwrap();
        let rows = standings.as_table().unwrap();
        let winner = rows.iter().find(|r| r.wins == 1).unwrap();
        assert_eq!(winner.points, 2);
        assert_eq!(winner.team_id, TeamId::new("a"));
    }
}

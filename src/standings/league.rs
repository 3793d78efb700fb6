//! League table: the round-robin aggregation over a configurable
//! number of meetings per pair and a per-sport points table.

use crate::sport::{Sport, SportType};

use super::models::{CalcError, CalcResult, Standings};
use super::{tiebreak, Calculate};

#[derive(Clone, Copy, Debug, Default)]
pub struct LeagueCalculator;

impl Calculate for LeagueCalculator {
    fn sport_type(&self) -> SportType {
        SportType::League
    }

    fn compute(&self, sport: &Sport) -> CalcResult<Standings> {
        if sport.sport_type != SportType::League {
            return Err(CalcError::FormatMismatch {
                expected: SportType::League,
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
    use crate::sport::{Team, TeamId};

    #[test]
    fn test_double_round_robin_counts_both_meetings() {
        let mut sport = Sport::new("test", SportType::League);
        for id in ["a", "b"] {
            sport.add_team(Team::new(id, id)).unwrap();
        }
        sport.generate_structure().unwrap();
        assert_eq!(sport.matches.len(), 2);

        let ids: Vec<_> = sport.matches.iter().map(|m| m.id.clone()).collect();
        sport.record_result(&ids[0], 1, 0).unwrap();
        sport.record_result(&ids[1], 2, 2).unwrap();

        let standings = LeagueCalculator.compute(&sport).unwrap();
        let rows = standings.as_table().unwrap();
        let a = rows.iter().find(|r| r.team_id == TeamId::new("a")).unwrap();
        assert_eq!(a.played, 2);
        assert_eq!((a.wins, a.draws, a.losses), (1, 1, 0));
        assert_eq!(a.points, 4);
        assert_eq!(a.rank, 1);
    }
}

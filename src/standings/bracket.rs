//! Knockout bracket view: rounds of nodes plus the champion once the
//! final is complete.

use crate::sport::{Sport, SportType};

use super::models::{BracketNode, BracketView, CalcError, CalcResult, Standings};
use super::Calculate;

#[derive(Clone, Copy, Debug, Default)]
pub struct BracketCalculator;

impl Calculate for BracketCalculator {
    fn sport_type(&self) -> SportType {
        SportType::Tournament
    }

    fn compute(&self, sport: &Sport) -> CalcResult<Standings> {
        if sport.sport_type != SportType::Tournament {
            return Err(CalcError::FormatMismatch {
                expected: SportType::Tournament,
                actual: sport.sport_type,
            });
        }

        let round_count = sport.matches.iter().map(|m| m.round).max().unwrap_or(0);
        let mut rounds: Vec<Vec<BracketNode>> = vec![Vec::new(); round_count as usize];
        for m in &sport.matches {
            rounds[(m.round - 1) as usize].push(BracketNode {
                match_id: m.id.clone(),
                round: m.round,
                home: m.home.clone(),
                away: m.away.clone(),
                score_home: m.score_home,
                score_away: m.score_away,
                status: m.status,
                winner: m.winner(),
            });
        }

        // The final is the one match that feeds nothing.
        let champion = sport
            .matches
            .iter()
            .find(|m| m.next_match_id.is_none())
            .and_then(|m| m.winner());

        Ok(Standings::Bracket(BracketView { rounds, champion }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::{MatchId, Team, TeamId};

    fn tournament(count: usize) -> Sport {
        let mut sport = Sport::new("test", SportType::Tournament);
        for n in 1..=count {
            sport
                .add_team(Team::new(format!("t{n}").as_str(), &format!("Team {n}")))
                .unwrap();
        }
        sport.generate_structure().unwrap();
        sport
    }

    #[test]
    fn test_format_mismatch() {
        let sport = Sport::new("test", SportType::League);
        let err = BracketCalculator.compute(&sport).unwrap_err();
        assert_eq!(
            err,
            CalcError::FormatMismatch {
                expected: SportType::Tournament,
                actual: SportType::League,
            }
        );
    }

    #[test]
    fn test_no_champion_until_final_completes() {
        let mut sport = tournament(4);
        sport.record_result(&MatchId::new("m1"), 2, 0).unwrap();
        let standings = BracketCalculator.compute(&sport).unwrap();
        let view = standings.as_bracket().unwrap();
        assert_eq!(view.rounds.len(), 2);
        assert_eq!(view.rounds[0].len(), 2);
        assert_eq!(view.champion, None);
    }

    #[test]
    fn test_champion_is_final_winner() {
        let mut sport = tournament(4);
        sport.record_result(&MatchId::new("m1"), 2, 0).unwrap();
        sport.record_result(&MatchId::new("m2"), 0, 1).unwrap();
        sport.record_result(&MatchId::new("m3"), 1, 2).unwrap();
        let standings = BracketCalculator.compute(&sport).unwrap();
        let view = standings.as_bracket().unwrap();
        assert_eq!(view.champion, Some(TeamId::new("t3")));
    }
}

//! Format calculators: four pure algorithms turning a [`Sport`]
//! snapshot into a standings view.
//!
//! Formats are a closed union dispatched with `enum_dispatch`; a new
//! format means a new variant and a new calculator, nothing else.
//! Calculators never cache: every call re-derives the view from the
//! match ledger, so corrections can never leave a stale standing.

pub mod models;

mod bracket;
mod league;
mod ranking;
mod round_robin;
mod tiebreak;

use enum_dispatch::enum_dispatch;

use crate::sport::{Sport, SportType};

pub use bracket::BracketCalculator;
pub use league::LeagueCalculator;
pub use models::{
    BracketNode, BracketView, CalcError, CalcResult, RankingRow, Standings, StandingsRow,
};
pub use ranking::RankingCalculator;
pub use round_robin::RoundRobinCalculator;

/// A pure standings computation over one sport snapshot.
#[enum_dispatch]
pub trait Calculate {
    /// The sport type this calculator understands.
    fn sport_type(&self) -> SportType;

    /// Derive the standings view. Fails only on a format contract
    /// violation, never on partially played or all-zero input.
    fn compute(&self, sport: &Sport) -> CalcResult<Standings>;
}

/// The closed set of format calculators.
#[enum_dispatch(Calculate)]
#[derive(Clone, Copy, Debug)]
pub enum FormatCalculator {
    Bracket(BracketCalculator),
    RoundRobin(RoundRobinCalculator),
    Ranking(RankingCalculator),
    League(LeagueCalculator),
}

impl FormatCalculator {
    /// Calculator for a sport type.
    #[must_use]
    pub fn for_type(sport_type: SportType) -> Self {
        match sport_type {
            SportType::Tournament => BracketCalculator.into(),
            SportType::RoundRobin => RoundRobinCalculator.into(),
            SportType::Ranking => RankingCalculator.into(),
            SportType::League => LeagueCalculator.into(),
        }
    }
}

/// Standings for a sport, computed by its own format's calculator.
pub fn standings(sport: &Sport) -> CalcResult<Standings> {
    FormatCalculator::for_type(sport.sport_type).compute(sport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::Team;

    #[test]
    fn test_dispatch_matches_sport_type() {
        for sport_type in [
            SportType::Tournament,
            SportType::RoundRobin,
            SportType::Ranking,
            SportType::League,
        ] {
            let calculator = FormatCalculator::for_type(sport_type);
            assert_eq!(calculator.sport_type(), sport_type);
        }
    }

    #[test]
    fn test_standings_never_fails_on_matching_type() {
        let mut sport = Sport::new("test", SportType::RoundRobin);
        for id in ["a", "b"] {
            sport.add_team(Team::new(id, id)).unwrap();
        }
        sport.generate_structure().unwrap();
        let result = standings(&sport).unwrap();
        assert_eq!(result.as_table().unwrap().len(), 2);
    }
}

//! Match structure generation: seeded single-elimination brackets and
//! circle-method round-robin fixtures.

use log::info;

use super::constants::MIN_TEAMS;
use super::entities::{Entrant, Match, MatchId, MatchStatus, Side, Sport, SportType, Team};
use super::errors::{SportError, SportResult};

impl Sport {
    /// (Re)generate the full match structure for this sport's format.
    /// Any previously generated matches and results are replaced.
    pub fn generate_structure(&mut self) -> SportResult<()> {
        match self.sport_type {
            SportType::Tournament => self.generate_bracket(),
            SportType::RoundRobin => self.generate_meetings(1),
            SportType::League => self.generate_meetings(self.meetings),
            // Ranking sports have no fixtures; results arrive as performances.
            SportType::Ranking => Ok(()),
        }
    }

    /// Build the smallest single-elimination tree of size 2^k >= N.
    ///
    /// Matches are stored flat, round by round, the final last. Seeding
    /// follows the standard doubling pattern (1 vs lowest, 2 vs second
    /// lowest), so byes land against the top seeds and two byes never
    /// meet in round 1.
    fn generate_bracket(&mut self) -> SportResult<()> {
        let team_count = self.teams.len();
        if team_count < MIN_TEAMS {
            return Err(SportError::NotEnoughTeams {
                needed: MIN_TEAMS,
                current: team_count,
            });
        }

        let size = team_count.next_power_of_two();
        let seeded = self.seeded_teams();
        let order = seed_order(size);

        let total = size - 1;
        let ids: Vec<MatchId> = (1..=total)
            .map(|n| MatchId::new(&format!("m{n}")))
            .collect();

        let mut matches = Vec::with_capacity(total);
        let mut start = 0usize;
        let mut count = size / 2;
        let mut round = 1u32;
        while count >= 1 {
            let next_start = start + count;
            for pos in 0..count {
                let (home, away) = if round == 1 {
                    (
                        entrant_for_seed(&seeded, order[2 * pos]),
                        entrant_for_seed(&seeded, order[2 * pos + 1]),
                    )
                } else {
                    (Entrant::Tbd, Entrant::Tbd)
                };
                let mut m = Match::new(ids[start + pos].clone(), round, home, away);
                if count > 1 {
                    m.next_match_id = Some(ids[next_start + pos / 2].clone());
                    m.next_slot = Some(if pos % 2 == 0 { Side::Home } else { Side::Away });
                }
                matches.push(m);
            }
            start = next_start;
            count /= 2;
            round += 1;
        }

        self.matches = matches;
        self.complete_byes();

        info!(
            "generated bracket for sport {}: {} teams, {} matches",
            self.id, team_count, total
        );
        Ok(())
    }

    /// Teams in seeding order: explicit seeds ascending, then the
    /// unseeded in registration order.
    fn seeded_teams(&self) -> Vec<&Team> {
        let mut seeded: Vec<&Team> = self.teams.iter().collect();
        seeded.sort_by_key(|team| team.seed.unwrap_or(u32::MAX));
        seeded
    }

    /// Complete round-1 bye matches and seat the free side downstream.
    fn complete_byes(&mut self) {
        for idx in 0..self.matches.len() {
            let m = &self.matches[idx];
            if m.round == 1 && (m.home.is_bye() || m.away.is_bye()) {
                self.matches[idx].status = MatchStatus::Completed;
                self.propagate(idx);
            }
        }
    }

    /// Circle-method fixtures: every pair meets `meetings` times, home
    /// and away swapped on alternating meetings. With an odd team count
    /// one team sits out each round.
    fn generate_meetings(&mut self, meetings: u32) -> SportResult<()> {
        let team_count = self.teams.len();
        if team_count < MIN_TEAMS {
            return Err(SportError::NotEnoughTeams {
                needed: MIN_TEAMS,
                current: team_count,
            });
        }

        let mut ring: Vec<Option<usize>> = (0..team_count).map(Some).collect();
        if team_count % 2 == 1 {
            ring.push(None);
        }
        let ring_size = ring.len();
        let rounds_per_meeting = ring_size - 1;

        let mut matches = Vec::new();
        let mut sequence = 0usize;
        for meeting in 0..meetings {
            let mut current = ring.clone();
            for cycle_round in 0..rounds_per_meeting {
                let round = meeting * rounds_per_meeting as u32 + cycle_round as u32 + 1;
                for pair in 0..ring_size / 2 {
                    let (first, second) = (current[pair], current[ring_size - 1 - pair]);
                    let (Some(first), Some(second)) = (first, second) else {
                        continue;
                    };
                    let (home, away) = if meeting % 2 == 0 {
                        (first, second)
                    } else {
                        (second, first)
                    };
                    sequence += 1;
                    matches.push(Match::new(
                        MatchId::new(&format!("m{sequence}")),
                        round,
                        Entrant::Team(self.teams[home].id.clone()),
                        Entrant::Team(self.teams[away].id.clone()),
                    ));
                }
                // Rotate everything but the first position.
                let last = current.pop().expect("ring is never empty");
                current.insert(1, last);
            }
        }

        self.matches = matches;
        info!(
            "generated {} fixtures for sport {}: {} teams, {} meeting(s)",
            self.matches.len(),
            self.id,
            team_count,
            meetings
        );
        Ok(())
    }
}

/// Slot order of seeds for a bracket of `size` entrants (1-based):
/// start from [1] and repeatedly pair each seed with its mirror, so
/// seed 1 meets the lowest seed, seed 2 the second lowest, and the top
/// two seeds can only meet in the final.
fn seed_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    let mut n = 1;
    while n < size {
        n *= 2;
        let mut next = Vec::with_capacity(n);
        for &seed in &order {
            next.push(seed);
            next.push(n + 1 - seed);
        }
        order = next;
    }
    order
}

fn entrant_for_seed(seeded: &[&Team], seed: usize) -> Entrant {
    match seeded.get(seed - 1) {
        Some(team) => Entrant::Team(team.id.clone()),
        None => Entrant::Bye,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::entities::TeamId;

    fn sport_with_teams(sport_type: SportType, count: usize) -> Sport {
        let mut sport = Sport::new("test", sport_type);
        for n in 1..=count {
            sport
                .add_team(Team::new(format!("t{n}").as_str(), &format!("Team {n}")))
                .unwrap();
        }
        sport
    }

    #[test]
    fn test_seed_order_doubling_pattern() {
        assert_eq!(seed_order(2), vec![1, 2]);
        assert_eq!(seed_order(4), vec![1, 4, 2, 3]);
        assert_eq!(seed_order(8), vec![1, 8, 4, 5, 2, 7, 3, 6]);
    }

    #[test]
    fn test_four_team_bracket_has_three_matches() {
        let mut sport = sport_with_teams(SportType::Tournament, 4);
        sport.generate_structure().unwrap();
        assert_eq!(sport.matches.len(), 3);

        // Semis feed the final; the final feeds nothing.
        let final_id = MatchId::new("m3");
        assert_eq!(sport.matches[0].next_match_id, Some(final_id.clone()));
        assert_eq!(sport.matches[0].next_slot, Some(Side::Home));
        assert_eq!(sport.matches[1].next_match_id, Some(final_id));
        assert_eq!(sport.matches[1].next_slot, Some(Side::Away));
        assert_eq!(sport.matches[2].next_match_id, None);

        // 1 vs 4, 2 vs 3.
        assert_eq!(sport.matches[0].home.team(), Some(&TeamId::new("t1")));
        assert_eq!(sport.matches[0].away.team(), Some(&TeamId::new("t4")));
        assert_eq!(sport.matches[1].home.team(), Some(&TeamId::new("t2")));
        assert_eq!(sport.matches[1].away.team(), Some(&TeamId::new("t3")));
    }

    #[test]
    fn test_five_team_bracket_byes_advance_top_seeds() {
        let mut sport = sport_with_teams(SportType::Tournament, 5);
        sport.generate_structure().unwrap();
        // Tree of 8: 7 matches, 3 byes against the top three seeds.
        assert_eq!(sport.matches.len(), 7);
        let byes: Vec<&Match> = sport
            .matches
            .iter()
            .filter(|m| m.home.is_bye() || m.away.is_bye())
            .collect();
        assert_eq!(byes.len(), 3);
        for bye in &byes {
            assert_eq!(bye.status, MatchStatus::Completed);
        }
        // No bye meets another bye.
        assert!(byes.iter().all(|m| !(m.home.is_bye() && m.away.is_bye())));

        // Seed 1 skipped round 1 and already sits in its round-2 slot.
        let quarter = sport.match_by_id(&MatchId::new("m5")).unwrap();
        assert_eq!(quarter.home.team(), Some(&TeamId::new("t1")));
    }

    #[test]
    fn test_explicit_seeds_override_registration_order() {
        let mut sport = Sport::new("test", SportType::Tournament);
        sport.add_team(Team::new("a", "A")).unwrap();
        sport.add_team(Team::new("b", "B").with_seed(1)).unwrap();
        sport.add_team(Team::new("c", "C").with_seed(2)).unwrap();
        sport.add_team(Team::new("d", "D")).unwrap();
        sport.generate_structure().unwrap();
        // b is seed 1 and opens at home against the lowest seed (d).
        assert_eq!(sport.matches[0].home.team(), Some(&TeamId::new("b")));
        assert_eq!(sport.matches[0].away.team(), Some(&TeamId::new("d")));
    }

    #[test]
    fn test_round_robin_every_pair_once() {
        let mut sport = sport_with_teams(SportType::RoundRobin, 5);
        sport.generate_structure().unwrap();
        // 5 teams: 10 fixtures over 5 rounds, each team sits out once.
        assert_eq!(sport.matches.len(), 10);
        assert_eq!(sport.matches.iter().map(|m| m.round).max(), Some(5));
        for a in 1..=5 {
            for b in (a + 1)..=5 {
                let (ta, tb) = (TeamId::new(&format!("t{a}")), TeamId::new(&format!("t{b}")));
                let meetings = sport
                    .matches
                    .iter()
                    .filter(|m| m.involves(&ta) && m.involves(&tb))
                    .count();
                assert_eq!(meetings, 1, "t{a} vs t{b}");
            }
        }
    }

    #[test]
    fn test_league_double_round_robin_swaps_home_advantage() {
        let mut sport = sport_with_teams(SportType::League, 4);
        sport.generate_structure().unwrap();
        assert_eq!(sport.matches.len(), 12);

        let (t1, t2) = (TeamId::new("t1"), TeamId::new("t2"));
        let pair: Vec<&Match> = sport
            .matches
            .iter()
            .filter(|m| m.involves(&t1) && m.involves(&t2))
            .collect();
        assert_eq!(pair.len(), 2);
        assert_ne!(pair[0].home, pair[1].home);
    }

    #[test]
    fn test_not_enough_teams() {
        let mut sport = sport_with_teams(SportType::Tournament, 1);
        let err = sport.generate_structure().unwrap_err();
        assert_eq!(
            err,
            SportError::NotEnoughTeams {
                needed: 2,
                current: 1
            }
        );
    }
}

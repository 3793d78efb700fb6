use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use sports_day::sport::{MatchId, Side, Sport, SportType, Team, TimeSlot, TimeSlotId};
use sports_day::{standings, validate};

/// A fully played league season for `team_count` teams.
fn played_league(team_count: usize) -> Sport {
    let mut sport = Sport::new("bench", SportType::League);
    for n in 1..=team_count {
        sport
            .add_team(Team::new(format!("t{n}").as_str(), &format!("Team {n}")))
            .unwrap();
    }
    sport.generate_structure().unwrap();

    let mut rng = rand::rng();
    let ids: Vec<MatchId> = sport.matches.iter().map(|m| m.id.clone()).collect();
    for id in &ids {
        let home = rng.random_range(0i64..6);
        let away = rng.random_range(0i64..6);
        sport.record_result(id, home, away).unwrap();
    }
    sport
}

/// A fully played bracket for `team_count` teams.
fn played_bracket(team_count: usize) -> Sport {
    let mut sport = Sport::new("bench", SportType::Tournament);
    for n in 1..=team_count {
        sport
            .add_team(Team::new(format!("t{n}").as_str(), &format!("Team {n}")))
            .unwrap();
    }
    sport.generate_structure().unwrap();

    let mut rng = rand::rng();
    let ids: Vec<MatchId> = sport.matches.iter().map(|m| m.id.clone()).collect();
    for id in &ids {
        let m = sport.match_by_id(id).unwrap();
        if m.home.team().is_none() || m.away.team().is_none() {
            continue;
        }
        let home = rng.random_range(0i64..6);
        let away = rng.random_range(0i64..6);
        if home == away {
            sport.record_decided(id, home, away, Side::Home).unwrap();
        } else {
            sport.record_result(id, home, away).unwrap();
        }
    }
    sport
}

fn bench_league_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("league_standings");
    for team_count in [8, 20] {
        let sport = played_league(team_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(team_count),
            &sport,
            |b, sport| b.iter(|| standings(sport).unwrap()),
        );
    }
    group.finish();
}

fn bench_bracket_standings(c: &mut Criterion) {
    let sport = played_bracket(64);
    c.bench_function("bracket_standings_64", |b| {
        b.iter(|| standings(&sport).unwrap());
    });
}

fn bench_correction_cascade(c: &mut Criterion) {
    c.bench_function("correction_cascade_64", |b| {
        let sport = played_bracket(64);
        let first = sport.matches[0].id.clone();
        b.iter(|| {
            let mut fresh = sport.clone();
            // Flip the opening match's winner both ways; each flip
            // walks the reset chain all the way to the final.
            fresh.record_result(&first, 9, 0).unwrap();
            fresh.record_result(&first, 0, 9).unwrap();
            fresh
        });
    });
}

fn bench_schedule_validation(c: &mut Criterion) {
    let mut sport = played_league(20);
    for n in 0..10 {
        sport
            .schedule_settings
            .time_slots
            .push(TimeSlot::new(format!("s{n}").as_str(), &format!("slot {n}")));
    }
    for n in 0..sport.matches.len() {
        let slot = TimeSlotId::new(&format!("s{}", n % 10));
        let id = sport.matches[n].id.clone();
        sport.assign_time_slot(&id, &slot, Some("Main hall")).unwrap();
    }
    c.bench_function("schedule_validation_20_teams", |b| {
        b.iter(|| validate(&sport));
    });
}

criterion_group!(
    benches,
    bench_league_standings,
    bench_bracket_standings,
    bench_correction_cascade,
    bench_schedule_validation
);
criterion_main!(benches);

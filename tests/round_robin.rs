//! Integration tests for round-robin scheduling: coverage, round counts and byes.

use league_tournament_web::{generate_round_robin, generate_schedule, Tournament, TournamentError};
use std::collections::{HashMap, HashSet};

fn unordered(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=20u32 {
        let participants: Vec<u32> = (1..=n).collect();
        let rounds = generate_round_robin(&participants).unwrap();

        let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
        assert_eq!(rounds.len() as u32, expected_rounds, "rounds for n={n}");

        let mut seen: HashMap<(u32, u32), usize> = HashMap::new();
        for r in &rounds {
            for p in &r.pairings {
                assert_ne!(p.home, p.away);
                assert_eq!(p.round, r.number);
                *seen.entry(unordered(p.home, p.away)).or_default() += 1;
            }
        }
        assert_eq!(seen.len() as u32, n * (n - 1) / 2, "pairs for n={n}");
        assert!(seen.values().all(|&c| c == 1), "duplicate pair for n={n}");
    }
}

#[test]
fn nobody_plays_twice_in_a_round() {
    for n in 2..=20u32 {
        let participants: Vec<u32> = (1..=n).collect();
        for r in generate_round_robin(&participants).unwrap() {
            let mut busy = HashSet::new();
            for p in &r.pairings {
                assert!(busy.insert(p.home));
                assert!(busy.insert(p.away));
            }
            if let Some(idle) = r.idle {
                assert!(!busy.contains(&idle));
            }
        }
    }
}

#[test]
fn odd_counts_give_each_participant_one_bye() {
    for n in (3..=19u32).step_by(2) {
        let participants: Vec<u32> = (1..=n).collect();
        let rounds = generate_round_robin(&participants).unwrap();

        let mut byes: HashMap<u32, usize> = HashMap::new();
        for r in &rounds {
            assert_eq!(r.pairings.len() as u32, (n - 1) / 2);
            let idle = r.idle.expect("odd schedule has an idle participant every round");
            *byes.entry(idle).or_default() += 1;
        }
        assert_eq!(byes.len() as u32, n);
        assert!(byes.values().all(|&c| c == 1));
    }
}

#[test]
fn even_counts_have_no_byes() {
    let rounds = generate_round_robin(&["a", "b", "c", "d", "e", "f"]).unwrap();
    assert!(rounds.iter().all(|r| r.idle.is_none() && r.pairings.len() == 3));
}

#[test]
fn tournament_schedule_persists_fixtures_and_zero_standings() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["A", "B", "C", "D", "E"]).unwrap();
    let summary = generate_schedule(&mut t, false).unwrap();

    assert_eq!(summary.rounds, 5);
    assert_eq!(summary.matches_created, 10);
    assert_eq!(t.fixtures.len(), 10);
    assert_eq!(t.round_count(), 5);
    assert!(t.fixtures.iter().all(|f| !f.is_completed() && f.score.is_none()));
    assert_eq!(t.standings.len(), 5);
    assert!(t.standings.iter().all(|r| r.played == 0 && r.points == 0));

    assert_eq!(
        generate_schedule(&mut t, false),
        Err(TournamentError::ScheduleAlreadyGenerated)
    );
}

#[test]
fn shuffled_schedule_still_covers_every_pair() {
    let names: Vec<String> = (0..8).map(|i| format!("Team {i}")).collect();
    let mut t = Tournament::with_teams("s1", "Season 1", names).unwrap();
    generate_schedule(&mut t, true).unwrap();

    let pairs: HashSet<_> = t
        .fixtures
        .iter()
        .map(|f| if f.home < f.away { (f.home, f.away) } else { (f.away, f.home) })
        .collect();
    assert_eq!(pairs.len(), 28);
    assert_eq!(t.fixtures.len(), 28);
}

#[test]
fn schedule_needs_two_teams() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Solo"]).unwrap();
    assert_eq!(
        generate_schedule(&mut t, false),
        Err(TournamentError::NotEnoughParticipants { supplied: 1 })
    );
    assert!(t.fixtures.is_empty());
    assert!(t.standings.is_empty());
}

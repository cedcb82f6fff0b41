//! Schedule phase: turn the registered teams into persisted fixtures.

use crate::logic::round_robin::generate_round_robin;
use crate::models::{Fixture, StandingsRow, TeamId, Tournament, TournamentError};
use rand::seq::SliceRandom;
use serde::Serialize;

/// What a schedule generation produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub rounds: usize,
    pub matches_created: usize,
}

/// Generate the round robin for the tournament's teams and create all-zero standings.
///
/// Fails if fixtures already exist or fewer than 2 teams are registered. With `shuffle` the team
/// order is randomised first; otherwise registration order seeds the circle.
pub fn generate_schedule(
    tournament: &mut Tournament,
    shuffle: bool,
) -> Result<ScheduleSummary, TournamentError> {
    if tournament.is_scheduled() {
        return Err(TournamentError::ScheduleAlreadyGenerated);
    }

    let mut team_ids: Vec<TeamId> = tournament.team_ids();
    if shuffle {
        team_ids.shuffle(&mut rand::thread_rng());
    }

    let rounds = generate_round_robin(&team_ids)?;
    let fixtures: Vec<Fixture> = rounds
        .iter()
        .flat_map(|r| r.pairings.iter())
        .map(|p| Fixture::new(p.round, p.home, p.away))
        .collect();

    let summary = ScheduleSummary {
        rounds: rounds.len(),
        matches_created: fixtures.len(),
    };

    tournament.fixtures = fixtures;
    tournament.standings = tournament
        .teams
        .iter()
        .map(|t| StandingsRow::new(t.id))
        .collect();
    tournament.previous_positions.clear();

    log::info!(
        "Generated round robin for {}: {} rounds, {} matches",
        tournament.slug,
        summary.rounds,
        summary.matches_created
    );
    Ok(summary)
}

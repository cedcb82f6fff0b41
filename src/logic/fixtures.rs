//! Match administration: create, edit and delete single fixtures outside the generated schedule.
//! Every change is followed by a full standings rebuild.

use crate::logic::standings::refresh_standings;
use crate::models::{Fixture, FixtureId, FixtureUpdate, TeamId, Tournament, TournamentError};

pub fn create_fixture(
    tournament: &mut Tournament,
    round: u32,
    home: TeamId,
    away: TeamId,
) -> Result<Fixture, TournamentError> {
    let fixture = tournament.add_fixture(round, home, away)?.clone();
    refresh_standings(tournament)?;
    log::info!(
        "Added match {} vs {} to round {} of {}",
        tournament.team_name(home),
        tournament.team_name(away),
        round,
        tournament.slug
    );
    Ok(fixture)
}

pub fn edit_fixture(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    update: FixtureUpdate,
) -> Result<Fixture, TournamentError> {
    let fixture = tournament.update_fixture(fixture_id, update)?.clone();
    refresh_standings(tournament)?;
    log::info!("Updated match {} in {}", fixture_id, tournament.slug);
    Ok(fixture)
}

/// Delete a fixture and its predictions. A played fixture stops counting towards standings.
pub fn delete_fixture(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
) -> Result<Fixture, TournamentError> {
    let removed = tournament.remove_fixture(fixture_id)?;
    refresh_standings(tournament)?;
    log::info!("Deleted match {} from {}", fixture_id, tournament.slug);
    Ok(removed)
}

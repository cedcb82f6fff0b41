//! Result reporting: record a final score, then rebuild the standings.

use crate::logic::predictions::score_fixture_predictions;
use crate::logic::standings::{recalculate_standings, standings_positions};
use crate::models::{Fixture, FixtureId, Score, Tournament, TournamentError};
use chrono::Utc;

/// Report the final score of a fixture.
///
/// Scores arrive signed so negative input can be rejected. Reporting an already completed fixture
/// replaces its score. The standings are recalculated from all completed fixtures, the previous
/// ranking is kept for movement arrows, and predictions on the fixture are scored.
/// Nothing changes if any step fails.
pub fn report_result(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    home: i64,
    away: i64,
) -> Result<Fixture, TournamentError> {
    let score = Score::from_reported(home, away)?;
    let index = tournament
        .fixtures
        .iter()
        .position(|f| f.id == fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;

    let mut fixtures = tournament.fixtures.clone();
    fixtures[index].record(score, Utc::now());
    let rows = recalculate_standings(&tournament.team_ids(), &fixtures)?;

    tournament.previous_positions = standings_positions(&tournament.standings);
    tournament.fixtures = fixtures;
    tournament.standings = rows;
    let scored = score_fixture_predictions(tournament, fixture_id, score);

    let fixture = tournament.fixtures[index].clone();
    log::info!(
        "Result reported for {}: {} {} - {} {} (round {}, {} predictions scored)",
        tournament.slug,
        tournament.team_name(fixture.home),
        score.home,
        score.away,
        tournament.team_name(fixture.away),
        fixture.round,
        scored
    );
    Ok(fixture)
}

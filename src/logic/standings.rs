//! Standings: full recalculation from completed fixtures, and ranking.

use crate::models::{
    Fixture, Movement, RankedRow, StandingsRow, TeamId, Tournament, TournamentError,
};
use std::collections::HashMap;

/// Rebuild the standings table from scratch.
///
/// Every team in `teams` gets a row (in the same order), starting from zero. Only fixtures that are
/// completed and scored are counted; the rest are skipped. A counted fixture that names a team
/// outside `teams` rejects the whole recalculation.
pub fn recalculate_standings(
    teams: &[TeamId],
    fixtures: &[Fixture],
) -> Result<Vec<StandingsRow>, TournamentError> {
    let mut table: HashMap<TeamId, StandingsRow> = teams
        .iter()
        .map(|&id| (id, StandingsRow::new(id)))
        .collect();

    for fixture in fixtures {
        let Some(score) = fixture.result() else {
            continue;
        };
        for team in [fixture.home, fixture.away] {
            if !table.contains_key(&team) {
                return Err(TournamentError::UnknownParticipant {
                    fixture: fixture.id,
                    team,
                });
            }
        }
        if let Some(row) = table.get_mut(&fixture.home) {
            row.record(score.home, score.away);
        }
        if let Some(row) = table.get_mut(&fixture.away) {
            row.record(score.away, score.home);
        }
    }

    Ok(teams.iter().filter_map(|id| table.remove(id)).collect())
}

/// Order rows for display: points desc, goals for desc, goals against asc.
/// Remaining ties keep input order. Positions are 1-based.
pub fn rank_standings(rows: &[StandingsRow]) -> Vec<(u32, &StandingsRow)> {
    let mut ordered: Vec<&StandingsRow> = rows.iter().collect();
    ordered.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.goals_against.cmp(&b.goals_against))
    });
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, row)| (i as u32 + 1, row))
        .collect()
}

/// Current table position of each team.
pub fn standings_positions(rows: &[StandingsRow]) -> HashMap<TeamId, u32> {
    rank_standings(rows)
        .into_iter()
        .map(|(position, row)| (row.team_id, position))
        .collect()
}

/// Replace the tournament's standings with a fresh recalculation.
/// On error the existing rows are left untouched.
pub fn refresh_standings(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let rows = recalculate_standings(&tournament.team_ids(), &tournament.fixtures)?;
    tournament.standings = rows;
    log::info!(
        "Recalculated standings for {} ({} completed matches)",
        tournament.slug,
        tournament.fixtures.iter().filter(|f| f.result().is_some()).count()
    );
    Ok(())
}

/// Ranked rows with team names, goal difference and movement since the last reported result.
pub fn ranked_standings(tournament: &Tournament) -> Vec<RankedRow> {
    rank_standings(&tournament.standings)
        .into_iter()
        .map(|(position, row)| {
            let team = tournament.team(row.team_id);
            let previous = tournament.previous_positions.get(&row.team_id).copied();
            RankedRow {
                position,
                team: team.map(|t| t.name.clone()).unwrap_or_default(),
                short_name: team.and_then(|t| t.short_name.clone()),
                goal_difference: row.goal_difference(),
                movement: Movement::between(previous, position),
                row: row.clone(),
            }
        })
        .collect()
}

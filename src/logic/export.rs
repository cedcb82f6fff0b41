//! CSV export of the standings table.

use crate::models::{RankedRow, TournamentError};

const HEADER: [&str; 10] = [
    "position",
    "team",
    "played",
    "won",
    "drawn",
    "lost",
    "goals_for",
    "goals_against",
    "goal_difference",
    "points",
];

/// Ranked standings as CSV (header line always present).
pub fn standings_csv(rows: &[RankedRow]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for r in rows {
        writer.write_record([
            r.position.to_string(),
            r.team.clone(),
            r.row.played.to_string(),
            r.row.won.to_string(),
            r.row.drawn.to_string(),
            r.row.lost.to_string(),
            r.row.goals_for.to_string(),
            r.row.goals_against.to_string(),
            r.goal_difference.to_string(),
            r.row.points.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}

//! Plain-text tables posted to the league's Discord channels inside a code block.

use crate::logic::standings::ranked_standings;
use crate::models::{FixtureStatus, RankedRow, Tournament, TournamentError};

const STANDINGS_HEADER: &str = "Pos ↕ Team        W  D  L  Pts";
const STANDINGS_RULE_WIDTH: usize = 30;
const SCHEDULE_RULE_WIDTH: usize = 35;

fn rule(width: usize) -> String {
    "―".repeat(width)
}

/// Title line for a standings post.
pub fn standings_title(matchday: Option<u32>) -> String {
    match matchday {
        Some(n) => format!("SCL STANDINGS - Matchday {}", n),
        None => "SCL STANDINGS".to_string(),
    }
}

/// Render ranked rows as the fixed-width standings table.
pub fn render_standings_table(rows: &[RankedRow]) -> String {
    let mut lines = vec![STANDINGS_HEADER.to_string(), rule(STANDINGS_RULE_WIDTH)];
    for r in rows {
        lines.push(format!(
            "{:>3} {} {:<11.11} {:>2} {:>2} {:>2}  {:>3}",
            r.position,
            r.movement.arrow(),
            r.display_name(),
            r.row.won,
            r.row.drawn,
            r.row.lost,
            r.row.points
        ));
    }
    lines.join("\n")
}

/// Title plus standings table for the tournament.
pub fn standings_announcement(tournament: &Tournament, matchday: Option<u32>) -> String {
    format!(
        "{}\n{}",
        standings_title(matchday),
        render_standings_table(&ranked_standings(tournament))
    )
}

/// Fixture list of one matchday with scores for completed fixtures.
pub fn matchday_schedule(tournament: &Tournament, round: u32) -> Result<String, TournamentError> {
    let fixtures = tournament.fixtures_in_round(round);
    if fixtures.is_empty() {
        return Err(TournamentError::RoundNotFound(round));
    }

    let mut lines = vec![
        format!("Matchday {} Schedule", round),
        rule(SCHEDULE_RULE_WIDTH),
    ];
    for (i, f) in fixtures.iter().enumerate() {
        let status = match (f.status, f.score) {
            (FixtureStatus::Completed, Some(s)) => format!("{} - {}", s.home, s.away),
            _ => "Scheduled".to_string(),
        };
        lines.push(format!(
            "{}. {:<20.20} vs {:<20.20}  [{}]",
            i + 1,
            tournament.team_name(f.home),
            tournament.team_name(f.away),
            status
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movement, StandingsRow};
    use uuid::Uuid;

    #[test]
    fn standings_line_layout() {
        let row = RankedRow {
            position: 1,
            team: "Supersonic Acrobatic Rockets".to_string(),
            short_name: None,
            row: StandingsRow {
                team_id: Uuid::new_v4(),
                played: 3,
                won: 2,
                drawn: 1,
                lost: 0,
                goals_for: 9,
                goals_against: 2,
                points: 7,
            },
            goal_difference: 7,
            movement: Movement::Up,
        };
        let table = render_standings_table(&[row]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], STANDINGS_HEADER);
        assert_eq!(lines[2], "  1 ↑ Supersonic   2  1  0    7");
    }

    #[test]
    fn titles() {
        assert_eq!(standings_title(None), "SCL STANDINGS");
        assert_eq!(standings_title(Some(4)), "SCL STANDINGS - Matchday 4");
    }
}

//! StandingsRow and its ranked view.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
pub const POINTS_FOR_LOSS: u32 = 0;

/// Aggregate record of one team. Always derived from completed fixtures.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingsRow {
    /// An all-zero row for the team.
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Default::default()
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Apply one completed fixture from this team's side. Goal totals saturate.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Less => {
                self.lost += 1;
                self.points += POINTS_FOR_LOSS;
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }
    }
}

/// Change in table position since the previous ranking snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Up,
    Down,
    #[default]
    Same,
}

impl Movement {
    /// Compare the current position with the previous one (if any).
    pub fn between(previous: Option<u32>, current: u32) -> Self {
        match previous {
            Some(prev) if current < prev => Movement::Up,
            Some(prev) if current > prev => Movement::Down,
            _ => Movement::Same,
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Movement::Up => '↑',
            Movement::Down => '↓',
            Movement::Same => '→',
        }
    }
}

/// Standings row with its table position and team details (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// 1-based.
    pub position: u32,
    pub team: String,
    pub short_name: Option<String>,
    #[serde(flatten)]
    pub row: StandingsRow,
    pub goal_difference: i64,
    pub movement: Movement,
}

impl RankedRow {
    /// Short name if set, else the full name.
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn goal_totals_saturate_instead_of_overflowing() {
        let mut row = StandingsRow::new(Uuid::new_v4());
        row.record(4_000_000_000, 0);
        row.record(4_000_000_000, 0);
        assert_eq!(row.goals_for, u32::MAX);
        assert_eq!((row.played, row.won, row.points), (2, 2, 2 * POINTS_FOR_WIN));
    }
}

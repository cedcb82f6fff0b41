//! Player and PlayerPerformance data structures.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// A rostered player. Stat counters are entered by league staff from match reports.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub display_name: String,
    pub discord_id: Option<String>,
    /// Free-form roster role (e.g. "captain", "substitute").
    pub role: Option<String>,
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub wins: u32,
    pub losses: u32,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player on a team. Counters start at zero.
    pub fn new(team_id: TeamId, display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            display_name: display_name.into(),
            discord_id: None,
            role: None,
            goals: 0,
            assists: 0,
            saves: 0,
            wins: 0,
            losses: 0,
            created_at: Utc::now(),
        }
    }

    /// Derived per-game figures (for API responses).
    pub fn performance(&self) -> PlayerPerformance {
        PlayerPerformance::from_player(self)
    }
}

/// Fields that can change on an existing player; `None` leaves a field as is.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlayerUpdate {
    pub display_name: Option<String>,
    pub team_id: Option<TeamId>,
    pub discord_id: Option<String>,
    pub role: Option<String>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub saves: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

/// Performance view of a player. Rates are 0 before the first match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub total_matches: u32,
    /// Percentage, one decimal.
    pub win_rate: f64,
    pub goals_per_game: f64,
    pub assists_per_game: f64,
    pub saves_per_game: f64,
}

fn rounded(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl PlayerPerformance {
    pub fn from_player(p: &Player) -> Self {
        let total = p.wins + p.losses;
        if total == 0 {
            return Self::default();
        }
        let per_game = |n: u32| rounded(f64::from(n) / f64::from(total), 2);
        Self {
            total_matches: total,
            win_rate: rounded(f64::from(p.wins) / f64::from(total) * 100.0, 1),
            goals_per_game: per_game(p.goals),
            assists_per_game: per_game(p.assists),
            saves_per_game: per_game(p.saves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_is_zero_without_matches() {
        let p = Player::new(Uuid::new_v4(), "Nova");
        assert_eq!(p.performance(), PlayerPerformance::default());
    }

    #[test]
    fn performance_rates() {
        let mut p = Player::new(Uuid::new_v4(), "Nova");
        p.wins = 2;
        p.losses = 1;
        p.goals = 5;
        p.saves = 1;
        let perf = p.performance();
        assert_eq!(perf.total_matches, 3);
        assert_eq!(perf.win_rate, 66.7);
        assert_eq!(perf.goals_per_game, 1.67);
        assert_eq!(perf.assists_per_game, 0.0);
        assert_eq!(perf.saves_per_game, 0.33);
    }
}

//! Player leaderboard.

use crate::models::{PlayerId, Tournament};
use serde::{Deserialize, Serialize};

/// Default number of leaderboard entries.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Stat the player leaderboard is ordered by.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSortKey {
    #[default]
    Goals,
    Assists,
    Saves,
    Wins,
}

impl PlayerSortKey {
    /// Parse a query value. Unknown keys fall back to goals.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "assists" => Self::Assists,
            "saves" => Self::Saves,
            "wins" => Self::Wins,
            _ => Self::Goals,
        }
    }
}

/// One leaderboard line, with the team resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerRanking {
    pub position: u32,
    pub id: PlayerId,
    pub display_name: String,
    pub team: String,
    pub team_short_name: Option<String>,
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Top `limit` players by the chosen stat, highest first. Ties keep registration order.
pub fn player_leaderboard(
    tournament: &Tournament,
    sort_by: PlayerSortKey,
    limit: usize,
) -> Vec<PlayerRanking> {
    let mut players: Vec<_> = tournament.players.iter().collect();
    players.sort_by_key(|p| {
        std::cmp::Reverse(match sort_by {
            PlayerSortKey::Goals => p.goals,
            PlayerSortKey::Assists => p.assists,
            PlayerSortKey::Saves => p.saves,
            PlayerSortKey::Wins => p.wins,
        })
    });

    players
        .into_iter()
        .take(limit)
        .zip(1..)
        .map(|(p, position)| {
            let team = tournament.team(p.team_id);
            PlayerRanking {
                position,
                id: p.id,
                display_name: p.display_name.clone(),
                team: team.map(|t| t.name.clone()).unwrap_or_default(),
                team_short_name: team.and_then(|t| t.short_name.clone()),
                goals: p.goals,
                assists: p.assists,
                saves: p.saves,
                wins: p.wins,
                losses: p.losses,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_means_goals() {
        assert_eq!(PlayerSortKey::parse("Saves"), PlayerSortKey::Saves);
        assert_eq!(PlayerSortKey::parse("wins"), PlayerSortKey::Wins);
        assert_eq!(PlayerSortKey::parse("demos"), PlayerSortKey::Goals);
        assert_eq!(PlayerSortKey::parse(""), PlayerSortKey::Goals);
    }
}

//! Tournament: registered teams, fixtures, standings and predictions.

use crate::models::error::TournamentError;
use crate::models::fixture::{Fixture, FixtureId};
use crate::models::player::{Player, PlayerId, PlayerUpdate};
use crate::models::prediction::Prediction;
use crate::models::standings::StandingsRow;
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Fields supplied when creating a tournament.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewTournament {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full tournament state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// URL key, unique within the league.
    pub slug: String,
    pub name: String,
    pub season: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// In registration order; this order breaks ranking ties.
    pub teams: Vec<Team>,
    /// Empty until the round robin is generated.
    pub fixtures: Vec<Fixture>,
    /// One row per team once the round robin exists. Owned by the recalculation.
    pub standings: Vec<StandingsRow>,
    /// Table positions before the most recent reported result.
    #[serde(default)]
    pub previous_positions: HashMap<TeamId, u32>,
    pub predictions: Vec<Prediction>,
    /// Rostered players, in registration order.
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Changes to a registered team; `None` leaves a field as is. An empty short name clears it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub short_name: Option<String>,
}

/// Changes to a fixture. Teams and round are validated before anything is applied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FixtureUpdate {
    pub round: Option<u32>,
    pub home: Option<TeamId>,
    pub away: Option<TeamId>,
}

impl Tournament {
    /// Create an empty tournament. Slug validation happens in the league store.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            name: name.into(),
            season: None,
            description: None,
            created_at: Utc::now(),
            teams: Vec::new(),
            fixtures: Vec::new(),
            standings: Vec::new(),
            previous_positions: HashMap::new(),
            predictions: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Create a tournament with teams already registered (names must be unique).
    pub fn with_teams<I, S>(slug: &str, name: &str, teams: I) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut t = Self::new(slug, name);
        for team in teams {
            t.add_team(team, None)?;
        }
        Ok(t)
    }

    /// True once the round robin has been generated.
    pub fn is_scheduled(&self) -> bool {
        !self.fixtures.is_empty()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Look a team up by name (case-insensitive).
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    /// Team name, or an empty string for an unknown id.
    pub fn team_name(&self, id: TeamId) -> &str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    /// Fixtures of one round, in creation order.
    pub fn fixtures_in_round(&self, round: u32) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.round == round).collect()
    }

    /// Number of rounds in the generated schedule (0 before generation).
    pub fn round_count(&self) -> u32 {
        self.fixtures.iter().map(|f| f.round).max().unwrap_or(0)
    }

    /// Standings row of a team, if the schedule exists.
    pub fn standing(&self, id: TeamId) -> Option<&StandingsRow> {
        self.standings.iter().find(|r| r.team_id == id)
    }

    /// Register a team (only before the round robin is generated). Names are unique
    /// (case-insensitive). Existing standings get a zero row for it.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        short_name: Option<String>,
    ) -> Result<TeamId, TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RegistrationClosed);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.team_by_name(name_trimmed).is_some() {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed, short_name);
        let id = team.id;
        self.teams.push(team);
        if !self.standings.is_empty() {
            self.standings.push(StandingsRow::new(id));
        }
        Ok(id)
    }

    /// Rename a team or change its short name. Allowed at any time; ids stay the same.
    pub fn update_team(
        &mut self,
        team_id: TeamId,
        update: TeamUpdate,
    ) -> Result<&Team, TournamentError> {
        let name = match update.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(TournamentError::EmptyName);
                }
                if self
                    .team_by_name(&name)
                    .is_some_and(|other| other.id != team_id)
                {
                    return Err(TournamentError::DuplicateTeamName);
                }
                Some(name)
            }
            None => None,
        };
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        if let Some(name) = name {
            team.name = name;
        }
        if let Some(short) = update.short_name {
            let short = short.trim();
            team.short_name = (!short.is_empty()).then(|| short.to_string());
        }
        Ok(team)
    }

    /// Remove a team by id (only before the round robin is generated).
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RegistrationClosed);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        self.standings.retain(|r| r.team_id != team_id);
        self.previous_positions.remove(&team_id);
        self.players.retain(|p| p.team_id != team_id);
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look a player up by display name (case-insensitive).
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.display_name.to_lowercase() == name.trim().to_lowercase())
    }

    /// Players of one team, in registration order.
    pub fn roster(&self, team_id: TeamId) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team_id == team_id).collect()
    }

    fn check_player_name(
        &self,
        name: &str,
        except: Option<PlayerId>,
    ) -> Result<(), TournamentError> {
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        match self.player_by_name(name) {
            Some(other) if Some(other.id) != except => Err(TournamentError::DuplicatePlayerName),
            _ => Ok(()),
        }
    }

    /// Add a player to a registered team. Rosters stay open after the schedule is generated.
    pub fn add_player(
        &mut self,
        team_id: TeamId,
        display_name: &str,
        discord_id: Option<String>,
        role: Option<String>,
    ) -> Result<&Player, TournamentError> {
        let display_name = display_name.trim();
        self.check_player_name(display_name, None)?;
        if self.team(team_id).is_none() {
            return Err(TournamentError::TeamNotFound(team_id));
        }
        let mut player = Player::new(team_id, display_name);
        player.discord_id = non_blank(discord_id);
        player.role = non_blank(role);
        self.players.push(player);
        let idx = self.players.len() - 1;
        Ok(&self.players[idx])
    }

    /// Apply a partial update: profile fields, team transfer and stat counters.
    pub fn update_player(
        &mut self,
        id: PlayerId,
        update: PlayerUpdate,
    ) -> Result<&Player, TournamentError> {
        if self.player(id).is_none() {
            return Err(TournamentError::PlayerNotFound(id));
        }
        let display_name = update.display_name.map(|n| n.trim().to_string());
        if let Some(name) = &display_name {
            self.check_player_name(name, Some(id))?;
        }
        if let Some(team_id) = update.team_id {
            if self.team(team_id).is_none() {
                return Err(TournamentError::TeamNotFound(team_id));
            }
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))?;
        if let Some(name) = display_name {
            player.display_name = name;
        }
        if let Some(team_id) = update.team_id {
            player.team_id = team_id;
        }
        if update.discord_id.is_some() {
            player.discord_id = non_blank(update.discord_id);
        }
        if update.role.is_some() {
            player.role = non_blank(update.role);
        }
        let counters = [
            (&mut player.goals, update.goals),
            (&mut player.assists, update.assists),
            (&mut player.saves, update.saves),
            (&mut player.wins, update.wins),
            (&mut player.losses, update.losses),
        ];
        for (field, value) in counters {
            if let Some(v) = value {
                *field = v;
            }
        }
        Ok(player)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))?;
        Ok(self.players.remove(idx))
    }

    fn check_pairing(&self, round: u32, home: TeamId, away: TeamId) -> Result<(), TournamentError> {
        if round == 0 {
            return Err(TournamentError::InvalidRound(round));
        }
        if home == away {
            return Err(TournamentError::SameTeam(home));
        }
        for id in [home, away] {
            if self.team(id).is_none() {
                return Err(TournamentError::TeamNotFound(id));
            }
        }
        Ok(())
    }

    /// Schedule an extra fixture between two registered teams (e.g. a replayed match).
    pub fn add_fixture(
        &mut self,
        round: u32,
        home: TeamId,
        away: TeamId,
    ) -> Result<&Fixture, TournamentError> {
        self.check_pairing(round, home, away)?;
        self.fixtures.push(Fixture::new(round, home, away));
        let idx = self.fixtures.len() - 1;
        Ok(&self.fixtures[idx])
    }

    /// Move a fixture to another round or change its teams. A played fixture keeps its score.
    pub fn update_fixture(
        &mut self,
        id: FixtureId,
        update: FixtureUpdate,
    ) -> Result<&Fixture, TournamentError> {
        let current = self.fixture(id).ok_or(TournamentError::FixtureNotFound(id))?;
        let round = update.round.unwrap_or(current.round);
        let home = update.home.unwrap_or(current.home);
        let away = update.away.unwrap_or(current.away);
        self.check_pairing(round, home, away)?;

        let fixture = self
            .fixtures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(TournamentError::FixtureNotFound(id))?;
        fixture.round = round;
        fixture.home = home;
        fixture.away = away;
        Ok(fixture)
    }

    /// Delete a fixture together with the predictions made on it.
    pub fn remove_fixture(&mut self, id: FixtureId) -> Result<Fixture, TournamentError> {
        let idx = self
            .fixtures
            .iter()
            .position(|f| f.id == id)
            .ok_or(TournamentError::FixtureNotFound(id))?;
        self.predictions.retain(|p| p.fixture_id != id);
        Ok(self.fixtures.remove(idx))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

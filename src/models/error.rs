//! Errors that can occur during league and tournament operations.

use crate::models::fixture::FixtureId;
use crate::models::player::PlayerId;
use crate::models::team::TeamId;

/// Broad category of a [`TournamentError`], used to pick an HTTP status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied bad data; retrying unchanged fails the same way.
    InvalidInput,
    NotFound,
    /// The request is valid but the tournament is in the wrong state for it.
    Conflict,
    /// Stored fixtures disagree with the registered teams.
    Inconsistent,
    Internal,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than two participants handed to the scheduler.
    NotEnoughParticipants { supplied: usize },
    /// A reported or predicted score is below zero.
    NegativeScore { home: i64, away: i64 },
    /// A score above `MAX_SCORE`.
    ScoreOutOfRange { home: i64, away: i64 },
    /// Rounds are numbered from 1.
    InvalidRound(u32),
    /// A fixture needs two different teams.
    SameTeam(TeamId),
    EmptyName,
    EmptyUser,
    /// Slugs are non-empty and only use ASCII letters, digits, `-` and `_`.
    InvalidSlug(String),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Player display names are unique within a tournament (case-insensitive).
    DuplicatePlayerName,
    DuplicateSlug(String),
    /// Teams can only be added or removed before the schedule is generated.
    RegistrationClosed,
    ScheduleAlreadyGenerated,
    /// Predictions are closed once a fixture has a result.
    FixtureAlreadyPlayed(FixtureId),
    TournamentNotFound(String),
    TeamNotFound(TeamId),
    FixtureNotFound(FixtureId),
    PlayerNotFound(PlayerId),
    RoundNotFound(u32),
    /// A completed fixture names a team that is not registered in the tournament.
    UnknownParticipant { fixture: FixtureId, team: TeamId },
    /// Writing an export failed.
    Export(String),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            NotEnoughParticipants { .. }
            | NegativeScore { .. }
            | ScoreOutOfRange { .. }
            | EmptyName
            | EmptyUser
            | InvalidRound(_)
            | SameTeam(_)
            | InvalidSlug(_) => ErrorKind::InvalidInput,
            DuplicateTeamName
            | DuplicatePlayerName
            | DuplicateSlug(_)
            | RegistrationClosed
            | ScheduleAlreadyGenerated
            | FixtureAlreadyPlayed(_) => ErrorKind::Conflict,
            TournamentNotFound(_)
            | TeamNotFound(_)
            | FixtureNotFound(_)
            | PlayerNotFound(_)
            | RoundNotFound(_) => ErrorKind::NotFound,
            UnknownParticipant { .. } => ErrorKind::Inconsistent,
            Export(_) => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TournamentError::*;
        match self {
            NotEnoughParticipants { supplied } => {
                write!(f, "Tournament requires at least 2 teams (got {})", supplied)
            }
            NegativeScore { home, away } => {
                write!(f, "Scores cannot be negative ({} - {})", home, away)
            }
            ScoreOutOfRange { home, away } => write!(f, "Score out of range ({} - {})", home, away),
            InvalidRound(round) => write!(f, "Invalid round {}", round),
            SameTeam(id) => write!(f, "Team {} cannot play itself", id),
            EmptyName => write!(f, "Name is required"),
            EmptyUser => write!(f, "User is required"),
            InvalidSlug(slug) => write!(f, "Invalid slug {:?}", slug),
            DuplicateTeamName => write!(f, "A team with this name already exists"),
            DuplicatePlayerName => write!(f, "A player with this name already exists"),
            DuplicateSlug(slug) => write!(f, "A tournament with slug {} already exists", slug),
            RegistrationClosed => {
                write!(f, "Teams cannot change after the round robin is generated")
            }
            ScheduleAlreadyGenerated => write!(f, "Round robin already generated"),
            FixtureAlreadyPlayed(id) => write!(f, "Match {} has already been played", id),
            TournamentNotFound(slug) => write!(f, "Tournament {} not found", slug),
            TeamNotFound(id) => write!(f, "Team {} not found", id),
            FixtureNotFound(id) => write!(f, "Match {} not found", id),
            PlayerNotFound(id) => write!(f, "Player {} not found", id),
            RoundNotFound(round) => write!(f, "No matches found for matchday {}", round),
            UnknownParticipant { fixture, team } => {
                write!(f, "Match {} references team {} which is not registered", fixture, team)
            }
            Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::Export(e.to_string())
    }
}

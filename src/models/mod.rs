//! Data structures for the league: teams, players, fixtures, standings, predictions and
//! tournament state.

mod error;
mod fixture;
mod player;
mod prediction;
mod standings;
mod team;
mod tournament;

pub use error::{ErrorKind, TournamentError};
pub use fixture::{Fixture, FixtureId, FixtureStatus, Outcome, Score, MAX_SCORE};
pub use player::{Player, PlayerId, PlayerPerformance, PlayerUpdate};
pub use prediction::{Prediction, PredictionId, PredictionStanding};
pub use standings::{
    Movement, RankedRow, StandingsRow, POINTS_FOR_DRAW, POINTS_FOR_LOSS, POINTS_FOR_WIN,
};
pub use team::{Team, TeamId};
pub use tournament::{FixtureUpdate, NewTournament, TeamUpdate, Tournament, TournamentId};

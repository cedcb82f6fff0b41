//! League tournament web app: library with models, business logic, store and REST API.

pub mod api;
pub mod config;
pub mod league;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use league::League;
pub use logic::{
    create_fixture, delete_fixture, edit_fixture, generate_round_robin, generate_schedule,
    matchday_schedule, player_leaderboard, prediction_leaderboard, predictions_for_user,
    rank_standings, ranked_standings, recalculate_standings, refresh_standings, report_result,
    score_prediction, standings_announcement, standings_csv, submit_prediction, Pairing,
    PlayerRanking, PlayerSortKey, Round, ScheduleSummary, DEFAULT_LEADERBOARD_LIMIT,
};
pub use models::{
    ErrorKind, Fixture, FixtureId, FixtureStatus, FixtureUpdate, Movement, NewTournament, Outcome,
    Player, PlayerId, PlayerPerformance, PlayerUpdate, Prediction, PredictionStanding, RankedRow,
    Score, StandingsRow, Team, TeamId, TeamUpdate, Tournament, TournamentError, TournamentId,
    MAX_SCORE,
};

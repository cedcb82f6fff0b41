//! League business logic: scheduling, match admin, standings, results, players, predictions and
//! announcements.

mod announcements;
mod export;
mod fixtures;
mod players;
mod predictions;
mod report;
mod round_robin;
mod schedule;
mod standings;

pub use announcements::{
    matchday_schedule, render_standings_table, standings_announcement, standings_title,
};
pub use export::standings_csv;
pub use fixtures::{create_fixture, delete_fixture, edit_fixture};
pub use players::{player_leaderboard, PlayerRanking, PlayerSortKey, DEFAULT_LEADERBOARD_LIMIT};
pub use predictions::{
    prediction_leaderboard, predictions_for_user, score_prediction, submit_prediction,
    CORRECT_OUTCOME_POINTS, EXACT_SCORE_POINTS,
};
pub use report::report_result;
pub use round_robin::{generate_round_robin, Pairing, Round};
pub use schedule::{generate_schedule, ScheduleSummary};
pub use standings::{
    rank_standings, ranked_standings, recalculate_standings, refresh_standings,
    standings_positions,
};

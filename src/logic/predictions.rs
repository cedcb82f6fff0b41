//! Score predictions: submission, scoring and leaderboard.

use crate::models::{
    FixtureId, Prediction, PredictionStanding, Score, Tournament, TournamentError,
};
use std::collections::HashMap;

pub const EXACT_SCORE_POINTS: u32 = 5;
pub const CORRECT_OUTCOME_POINTS: u32 = 2;

/// Key that identifies a predicting user: trimmed, Unicode lowercase.
pub(crate) fn user_key(user: &str) -> String {
    user.trim().to_lowercase()
}

/// Points for one prediction: exact score 5, right winner (or draw) 2, otherwise 0.
pub fn score_prediction(predicted: Score, actual: Score) -> u32 {
    if predicted == actual {
        EXACT_SCORE_POINTS
    } else if predicted.outcome() == actual.outcome() {
        CORRECT_OUTCOME_POINTS
    } else {
        0
    }
}

/// Record a user's prediction for an unplayed fixture. A second prediction from the same user
/// (case-insensitive) for the same fixture replaces the first.
pub fn submit_prediction(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    user: &str,
    home: i64,
    away: i64,
) -> Result<Prediction, TournamentError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(TournamentError::EmptyUser);
    }
    let score = Score::from_reported(home, away)?;
    let fixture = tournament
        .fixture(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    if fixture.is_completed() {
        return Err(TournamentError::FixtureAlreadyPlayed(fixture_id));
    }

    let key = user_key(user);
    tournament
        .predictions
        .retain(|p| !(p.fixture_id == fixture_id && user_key(&p.user) == key));
    let prediction = Prediction::new(fixture_id, user, score);
    tournament.predictions.push(prediction.clone());
    log::debug!("Prediction from {} on match {}", user, fixture_id);
    Ok(prediction)
}

/// Award points to every prediction on the fixture. Re-running after a correction overwrites them.
pub(crate) fn score_fixture_predictions(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    actual: Score,
) -> usize {
    let mut scored = 0;
    for p in tournament
        .predictions
        .iter_mut()
        .filter(|p| p.fixture_id == fixture_id)
    {
        p.points = Some(score_prediction(p.score, actual));
        scored += 1;
    }
    scored
}

/// A user's predictions, newest first (same user matching as submission).
pub fn predictions_for_user<'a>(tournament: &'a Tournament, user: &str) -> Vec<&'a Prediction> {
    let key = user_key(user);
    let mut mine: Vec<&Prediction> = tournament
        .predictions
        .iter()
        .filter(|p| user_key(&p.user) == key)
        .collect();
    mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    mine
}

/// Users ordered by total points desc, then exact hits desc, then name.
pub fn prediction_leaderboard(tournament: &Tournament) -> Vec<PredictionStanding> {
    let mut by_user: HashMap<String, PredictionStanding> = HashMap::new();
    for p in &tournament.predictions {
        let entry = by_user
            .entry(user_key(&p.user))
            .or_insert_with(|| PredictionStanding {
                user: p.user.clone(),
                ..Default::default()
            });
        if let Some(points) = p.points {
            entry.points += points;
            entry.scored += 1;
            if points == EXACT_SCORE_POINTS {
                entry.exact_scores += 1;
            }
        }
    }

    let mut board: Vec<PredictionStanding> = by_user.into_values().collect();
    board.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.exact_scores.cmp(&a.exact_scores))
            .then(a.user.cmp(&b.user))
    });
    board
}
